//! HookEventType - Wire tags for repository events

use serde::{Deserialize, Serialize};

use crate::domain::errors::HookError;

/// Event tag as sent alongside a webhook payload
///
/// The set is closed: anything else is rejected with
/// [`HookError::UnsupportedEvent`] when parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HookEventType {
    Create,
    Delete,
    Fork,
    Push,
    Issues,
    IssueComment,
    PullRequest,
    Release,
}

impl HookEventType {
    /// Every supported tag, in dispatch order
    pub const ALL: [HookEventType; 8] = [
        HookEventType::Create,
        HookEventType::Delete,
        HookEventType::Fork,
        HookEventType::Push,
        HookEventType::Issues,
        HookEventType::IssueComment,
        HookEventType::PullRequest,
        HookEventType::Release,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookEventType::Create => "create",
            HookEventType::Delete => "delete",
            HookEventType::Fork => "fork",
            HookEventType::Push => "push",
            HookEventType::Issues => "issues",
            HookEventType::IssueComment => "issue_comment",
            HookEventType::PullRequest => "pull_request",
            HookEventType::Release => "release",
        }
    }
}

impl std::fmt::Display for HookEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HookEventType {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookEventType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| HookError::unsupported(s))
    }
}
