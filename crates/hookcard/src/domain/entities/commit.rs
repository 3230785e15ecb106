//! Commit records carried by push events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author or committer identity as recorded in git
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitUser {
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Account login when the email maps to a known user
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash
    pub id: String,
    pub message: String,
    /// Web page of the commit
    pub url: String,
    pub author: CommitUser,
    #[serde(default)]
    pub committer: Option<CommitUser>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Commit {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        url: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            url: url.into(),
            author: CommitUser {
                name: author_name.into(),
                ..Default::default()
            },
            committer: None,
            timestamp: None,
        }
    }

    /// First 7 characters of the hash
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(7) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// Message text before the first newline
    pub fn summary(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }
}
