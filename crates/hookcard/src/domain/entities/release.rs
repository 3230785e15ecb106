//! Release records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repository::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Release {
    #[serde(default)]
    pub id: i64,
    pub tag_name: String,
    #[serde(default)]
    pub target_commitish: String,
    /// Release title
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub author: User,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
