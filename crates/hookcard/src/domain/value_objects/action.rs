//! Action kinds carried by issue, comment and release events

use serde::{Deserialize, Serialize};

/// What happened to an issue or pull request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueAction {
    Opened,
    Closed,
    Reopened,
    Edited,
    Assigned,
    Unassigned,
    LabelUpdated,
    LabelCleared,
    Milestoned,
    Demilestoned,
    Synchronized,
}

impl IssueAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueAction::Opened => "opened",
            IssueAction::Closed => "closed",
            IssueAction::Reopened => "reopened",
            IssueAction::Edited => "edited",
            IssueAction::Assigned => "assigned",
            IssueAction::Unassigned => "unassigned",
            IssueAction::LabelUpdated => "label_updated",
            IssueAction::LabelCleared => "label_cleared",
            IssueAction::Milestoned => "milestoned",
            IssueAction::Demilestoned => "demilestoned",
            IssueAction::Synchronized => "synchronized",
        }
    }
}

impl std::fmt::Display for IssueAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to an issue comment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommentAction {
    Created,
    Edited,
    Deleted,
}

impl std::fmt::Display for CommentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentAction::Created => write!(f, "created"),
            CommentAction::Edited => write!(f, "edited"),
            CommentAction::Deleted => write!(f, "deleted"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseAction {
    #[default]
    Published,
}

impl std::fmt::Display for ReleaseAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseAction::Published => write!(f, "published"),
        }
    }
}
