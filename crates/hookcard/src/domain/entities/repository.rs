//! Repository and User records
//!
//! Read-only views of the hosting application's records, as embedded in
//! webhook payloads.

use serde::{Deserialize, Serialize};

/// An account referenced by an event (sender, pusher, author, assignee)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    /// Login handle
    #[serde(default)]
    pub username: String,
    /// Same handle under the GitHub-compatible key
    #[serde(default)]
    pub login: String,
    /// Display name, may be empty
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Login handle, whichever key the host filled in
    pub fn handle(&self) -> &str {
        if self.username.is_empty() {
            &self.login
        } else {
            &self.username
        }
    }

    /// Full name when set, login handle otherwise
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            self.handle()
        } else {
            &self.full_name
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub owner: Option<User>,
    pub name: String,
    /// `owner/name`
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    /// Web page of the repository, without trailing slash
    pub html_url: String,
    #[serde(default)]
    pub default_branch: String,
}

impl Repository {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        html_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            html_url: html_url.into(),
            ..Default::default()
        }
    }

    /// Source browser URL for a branch or tag
    pub fn src_url(&self, ref_name: &str) -> String {
        format!("{}/src/{}", self.html_url, ref_name)
    }

    pub fn issue_url(&self, number: i64) -> String {
        format!("{}/issues/{}", self.html_url, number)
    }

    pub fn pull_url(&self, number: i64) -> String {
        format!("{}/pulls/{}", self.html_url, number)
    }
}
