//! HookEvent - Repository lifecycle events
//!
//! One payload struct per event tag, mirroring the JSON the hosting
//! application posts to webhooks, and a `HookEvent` sum type over them.
//! Payloads are populated by the caller and never mutated here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::commit::Commit;
use super::issue::{Comment, Issue, PullRequest};
use super::release::Release;
use super::repository::{Repository, User};
use crate::domain::errors::HookError;
use crate::domain::value_objects::{CommentAction, HookEventType, IssueAction, RefType, ReleaseAction};

/// A branch or tag was created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePayload {
    #[serde(rename = "ref")]
    pub reference: String,
    pub ref_type: RefType,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub default_branch: String,
    pub repository: Repository,
    pub sender: User,
}

/// A branch or tag was deleted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletePayload {
    #[serde(rename = "ref")]
    pub reference: String,
    pub ref_type: RefType,
    #[serde(default)]
    pub pusher_type: String,
    pub repository: Repository,
    pub sender: User,
}

/// `repository` was forked into `forkee`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForkPayload {
    pub forkee: Repository,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
    pub compare_url: String,
    #[serde(default)]
    pub commits: Vec<Commit>,
    pub repository: Repository,
    pub pusher: User,
    pub sender: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssuesPayload {
    pub action: IssueAction,
    pub number: i64,
    pub issue: Issue,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueCommentPayload {
    pub action: CommentAction,
    pub issue: Issue,
    pub comment: Comment,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestPayload {
    pub action: IssueAction,
    pub number: i64,
    pub pull_request: PullRequest,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleasePayload {
    #[serde(default)]
    pub action: ReleaseAction,
    pub release: Release,
    pub repository: Repository,
    pub sender: User,
}

fn decode<T: DeserializeOwned>(
    event_type: HookEventType,
    data: &serde_json::Value,
) -> Result<T, HookError> {
    T::deserialize(data).map_err(|e| HookError::invalid_payload(event_type.as_str(), e))
}

/// Repository lifecycle event to be reported
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum HookEvent {
    Create(CreatePayload),
    Delete(DeletePayload),
    Fork(ForkPayload),
    Push(PushPayload),
    Issues(IssuesPayload),
    IssueComment(IssueCommentPayload),
    PullRequest(PullRequestPayload),
    Release(ReleasePayload),
}

impl HookEvent {
    /// Decode the payload that accompanies `event_type`
    ///
    /// A payload whose shape does not match the tag is reported as
    /// [`HookError::InvalidPayload`].
    pub fn from_parts(
        event_type: HookEventType,
        data: &serde_json::Value,
    ) -> Result<Self, HookError> {
        let event = match event_type {
            HookEventType::Create => Self::Create(decode(event_type, data)?),
            HookEventType::Delete => Self::Delete(decode(event_type, data)?),
            HookEventType::Fork => Self::Fork(decode(event_type, data)?),
            HookEventType::Push => Self::Push(decode(event_type, data)?),
            HookEventType::Issues => Self::Issues(decode(event_type, data)?),
            HookEventType::IssueComment => Self::IssueComment(decode(event_type, data)?),
            HookEventType::PullRequest => Self::PullRequest(decode(event_type, data)?),
            HookEventType::Release => Self::Release(decode(event_type, data)?),
        };

        Ok(event)
    }

    /// Parse the tag, then decode the payload
    pub fn from_tagged(tag: &str, data: &serde_json::Value) -> Result<Self, HookError> {
        let event_type: HookEventType = tag.parse()?;
        Self::from_parts(event_type, data)
    }

    pub fn event_type(&self) -> HookEventType {
        match self {
            Self::Create(_) => HookEventType::Create,
            Self::Delete(_) => HookEventType::Delete,
            Self::Fork(_) => HookEventType::Fork,
            Self::Push(_) => HookEventType::Push,
            Self::Issues(_) => HookEventType::Issues,
            Self::IssueComment(_) => HookEventType::IssueComment,
            Self::PullRequest(_) => HookEventType::PullRequest,
            Self::Release(_) => HookEventType::Release,
        }
    }

    /// Repository the event concerns
    pub fn repository(&self) -> &Repository {
        match self {
            Self::Create(p) => &p.repository,
            Self::Delete(p) => &p.repository,
            Self::Fork(p) => &p.repository,
            Self::Push(p) => &p.repository,
            Self::Issues(p) => &p.repository,
            Self::IssueComment(p) => &p.repository,
            Self::PullRequest(p) => &p.repository,
            Self::Release(p) => &p.repository,
        }
    }

    pub fn sender(&self) -> &User {
        match self {
            Self::Create(p) => &p.sender,
            Self::Delete(p) => &p.sender,
            Self::Fork(p) => &p.sender,
            Self::Push(p) => &p.sender,
            Self::Issues(p) => &p.sender,
            Self::IssueComment(p) => &p.sender,
            Self::PullRequest(p) => &p.sender,
            Self::Release(p) => &p.sender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "hookcard",
            "full_name": "acme/hookcard",
            "html_url": "https://git.example.com/acme/hookcard"
        })
    }

    #[test]
    fn test_from_tagged_push() {
        let data = json!({
            "ref": "refs/heads/main",
            "before": "0000000",
            "after": "abcdef1",
            "compare_url": "https://git.example.com/acme/hookcard/compare/0000000...abcdef1",
            "commits": [],
            "repository": repo_json(),
            "pusher": { "username": "alice" },
            "sender": { "username": "alice" }
        });

        let event = HookEvent::from_tagged("push", &data).unwrap();
        assert_eq!(event.event_type(), HookEventType::Push);
        assert_eq!(event.repository().name, "hookcard");
        assert_eq!(event.sender().handle(), "alice");

        match event {
            HookEvent::Push(p) => assert_eq!(p.reference, "refs/heads/main"),
            other => panic!("Expected Push event, got {:?}", other),
        }
    }

    #[test]
    fn test_fork_with_owner_and_both_handle_keys() {
        let user = json!({
            "id": 1,
            "username": "alice",
            "login": "alice",
            "full_name": "Alice",
            "email": "alice@example.com",
            "avatar_url": "https://git.example.com/avatars/1"
        });
        let repo = |owner: &str| {
            json!({
                "id": 2,
                "owner": user,
                "name": "hookcard",
                "full_name": format!("{owner}/hookcard"),
                "html_url": format!("https://git.example.com/{owner}/hookcard"),
                "created_at": "2024-05-01T20:00:00+08:00"
            })
        };
        let data = json!({ "forkee": repo("bob"), "repository": repo("alice"), "sender": user });

        let event = HookEvent::from_tagged("fork", &data).unwrap();
        assert_eq!(event.sender().handle(), "alice");
        assert_eq!(event.sender().display_name(), "Alice");
        let owner = event.repository().owner.as_ref().unwrap();
        assert_eq!(owner.login, "alice");
    }

    #[test]
    fn test_from_tagged_unknown_tag() {
        let err = HookEvent::from_tagged("wiki", &json!({})).unwrap_err();
        assert!(matches!(err, HookError::UnsupportedEvent { event } if event == "wiki"));
    }

    #[test]
    fn test_from_parts_shape_mismatch() {
        let data = json!({ "forkee": repo_json() });
        let err = HookEvent::from_parts(HookEventType::Fork, &data).unwrap_err();
        match err {
            HookError::InvalidPayload { event, .. } => assert_eq!(event, "fork"),
            other => panic!("Expected InvalidPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_release_action_defaults_to_published() {
        let data = json!({
            "release": {
                "tag_name": "v1.0.0",
                "author": { "username": "alice" }
            },
            "repository": repo_json(),
            "sender": { "username": "alice" }
        });

        let event = HookEvent::from_parts(HookEventType::Release, &data).unwrap();
        match event {
            HookEvent::Release(p) => {
                assert_eq!(p.action, ReleaseAction::Published);
                assert!(!p.release.draft);
            }
            other => panic!("Expected Release event, got {:?}", other),
        }
    }

    #[test]
    fn test_tagged_serde_layout() {
        let data = json!({
            "forkee": repo_json(),
            "repository": repo_json(),
            "sender": { "username": "bob" }
        });
        let event = HookEvent::from_parts(HookEventType::Fork, &data).unwrap();

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "fork");
        assert_eq!(value["payload"]["sender"]["username"], "bob");
    }
}
