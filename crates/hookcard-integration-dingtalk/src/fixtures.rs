//! Sample events shared by the unit tests

use hookcard::{
    Comment, CommentAction, Commit, CreatePayload, DeletePayload, ForkPayload, HookEvent,
    HookEventType, Issue, IssueAction, IssueCommentPayload, IssuesPayload, PullRequest,
    PullRequestPayload, PushPayload, RefType, Release, ReleaseAction, ReleasePayload, Repository,
    User,
};
use serde_json::json;

pub fn repo() -> Repository {
    Repository::new("hookcard", "acme/hookcard", "https://git.example.com/acme/hookcard")
}

pub fn sender() -> User {
    User::new("alice").with_full_name("Alice Liddell")
}

pub fn create_payload(ref_type: RefType, reference: &str) -> CreatePayload {
    CreatePayload {
        reference: reference.to_string(),
        ref_type,
        sha: "1111111aaaa".to_string(),
        default_branch: "main".to_string(),
        repository: repo(),
        sender: sender(),
    }
}

pub fn delete_payload(ref_type: RefType, reference: &str) -> DeletePayload {
    DeletePayload {
        reference: reference.to_string(),
        ref_type,
        pusher_type: "user".to_string(),
        repository: repo(),
        sender: sender(),
    }
}

pub fn fork_payload() -> ForkPayload {
    ForkPayload {
        forkee: Repository::new("hookcard", "bob/hookcard", "https://git.example.com/bob/hookcard"),
        repository: repo(),
        sender: User::new("bob"),
    }
}

pub fn push_payload() -> PushPayload {
    PushPayload {
        reference: "refs/heads/main".to_string(),
        before: "0000000".to_string(),
        after: "2222222bbbb".to_string(),
        compare_url: "https://git.example.com/acme/hookcard/compare/0000000...2222222bbbb"
            .to_string(),
        commits: vec![
            Commit::new(
                "1111111aaaa",
                "First",
                "https://git.example.com/acme/hookcard/commit/1111111aaaa",
                "Alice",
            ),
            Commit::new(
                "2222222bbbb",
                "Second\n\nWith details",
                "https://git.example.com/acme/hookcard/commit/2222222bbbb",
                "Bob",
            ),
        ],
        repository: repo(),
        pusher: sender(),
        sender: sender(),
    }
}

pub fn issue() -> Issue {
    Issue {
        id: 70,
        number: 7,
        user: Some(sender()),
        title: "Crash on start".to_string(),
        body: "It crashes".to_string(),
        state: "open".to_string(),
        ..Default::default()
    }
}

pub fn issues_payload(action: IssueAction) -> IssuesPayload {
    IssuesPayload {
        action,
        number: 7,
        issue: issue(),
        repository: repo(),
        sender: sender(),
    }
}

pub fn issue_comment_payload(action: CommentAction) -> IssueCommentPayload {
    IssueCommentPayload {
        action,
        issue: issue(),
        comment: Comment {
            id: 42,
            html_url: "https://git.example.com/acme/hookcard/issues/7#issuecomment-42".to_string(),
            user: Some(User::new("bob")),
            body: "Same here".to_string(),
            created_at: None,
        },
        repository: repo(),
        sender: User::new("bob"),
    }
}

pub fn pull_request_payload(action: IssueAction) -> PullRequestPayload {
    PullRequestPayload {
        action,
        number: 8,
        pull_request: PullRequest {
            id: 80,
            number: 8,
            title: "Add cards".to_string(),
            body: "Adds action cards".to_string(),
            html_url: "https://git.example.com/acme/hookcard/pulls/8".to_string(),
            ..Default::default()
        },
        repository: repo(),
        sender: sender(),
    }
}

pub fn release_payload() -> ReleasePayload {
    ReleasePayload {
        action: ReleaseAction::Published,
        release: Release {
            id: 1,
            tag_name: "v1.0.0".to_string(),
            target_commitish: "main".to_string(),
            name: "First release".to_string(),
            body: "Initial cut".to_string(),
            draft: false,
            prerelease: true,
            author: User::new("alice"),
            created_at: None,
        },
        repository: repo(),
        sender: sender(),
    }
}

/// One event per supported tag
pub fn all_events() -> Vec<HookEvent> {
    vec![
        HookEvent::Create(create_payload(RefType::Branch, "refs/heads/main")),
        HookEvent::Delete(delete_payload(RefType::Tag, "refs/tags/v0.1.0")),
        HookEvent::Fork(fork_payload()),
        HookEvent::Push(push_payload()),
        HookEvent::Issues(issues_payload(IssueAction::Opened)),
        HookEvent::IssueComment(issue_comment_payload(CommentAction::Created)),
        HookEvent::PullRequest(pull_request_payload(IssueAction::Opened)),
        HookEvent::Release(release_payload()),
    ]
}

/// JSON body the hosting application would post for `event_type`
pub fn event_json(event_type: HookEventType) -> serde_json::Value {
    let event = all_events()
        .into_iter()
        .find(|e| e.event_type() == event_type)
        .unwrap();

    match event {
        HookEvent::Create(p) => serde_json::to_value(p),
        HookEvent::Delete(p) => serde_json::to_value(p),
        HookEvent::Fork(p) => serde_json::to_value(p),
        HookEvent::Push(p) => serde_json::to_value(p),
        HookEvent::Issues(p) => serde_json::to_value(p),
        HookEvent::IssueComment(p) => serde_json::to_value(p),
        HookEvent::PullRequest(p) => serde_json::to_value(p),
        HookEvent::Release(p) => serde_json::to_value(p),
    }
    .unwrap()
}

/// Account object as the host serializes it, with both handle keys
fn host_user(login: &str, full_name: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "username": login,
        "login": login,
        "full_name": full_name,
        "email": format!("{login}@example.com"),
        "avatar_url": format!("https://git.example.com/avatars/{login}")
    })
}

fn host_repo(owner: &str, name: &str) -> serde_json::Value {
    json!({
        "id": 3,
        "owner": host_user(owner, ""),
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "description": "",
        "private": false,
        "fork": false,
        "parent": null,
        "empty": false,
        "mirror": false,
        "size": 2048,
        "html_url": format!("https://git.example.com/{owner}/{name}"),
        "ssh_url": format!("git@git.example.com:{owner}/{name}.git"),
        "clone_url": format!("https://git.example.com/{owner}/{name}.git"),
        "website": "",
        "stars_count": 0,
        "forks_count": 1,
        "watchers_count": 1,
        "open_issues_count": 1,
        "default_branch": "main",
        "created_at": "2024-05-01T20:00:00+08:00",
        "updated_at": "2024-05-02T09:30:00+08:00"
    })
}

fn host_issue() -> serde_json::Value {
    json!({
        "id": 70,
        "number": 7,
        "user": host_user("alice", "Alice Liddell"),
        "title": "Crash on start",
        "body": "It crashes",
        "labels": [{ "id": 1, "name": "bug", "color": "ee0701", "url": "" }],
        "milestone": null,
        "assignee": null,
        "state": "open",
        "comments": 1,
        "created_at": "2024-05-02T10:00:00+08:00",
        "updated_at": "2024-05-02T10:05:00+08:00",
        "pull_request": null
    })
}

/// Body the host posts for `event_type`, written out field by field
pub fn host_event_json(event_type: HookEventType) -> serde_json::Value {
    let repository = host_repo("acme", "hookcard");
    let sender = host_user("alice", "Alice Liddell");

    match event_type {
        HookEventType::Create => json!({
            "ref": "feature",
            "ref_type": "branch",
            "sha": "1111111aaaa",
            "default_branch": "main",
            "repository": repository,
            "sender": sender
        }),
        HookEventType::Delete => json!({
            "ref": "v0.1.0",
            "ref_type": "tag",
            "pusher_type": "user",
            "repository": repository,
            "sender": sender
        }),
        HookEventType::Fork => json!({
            "forkee": host_repo("bob", "hookcard"),
            "repository": repository,
            "sender": host_user("bob", "")
        }),
        HookEventType::Push => json!({
            "ref": "refs/heads/main",
            "before": "0000000000000000000000000000000000000000",
            "after": "abcdef1234567890abcdef1234567890abcdef12",
            "compare_url": "https://git.example.com/acme/hookcard/compare/0000000...abcdef1",
            "commits": [{
                "id": "abcdef1234567890abcdef1234567890abcdef12",
                "message": "Fix bug\n\nLonger explanation\n",
                "url": "https://git.example.com/acme/hookcard/commit/abcdef1234567890abcdef1234567890abcdef12",
                "author": { "name": "Alice", "email": "alice@example.com", "username": "alice" },
                "committer": { "name": "Alice", "email": "alice@example.com", "username": "alice" },
                "added": [],
                "removed": [],
                "modified": ["src/lib.rs"],
                "timestamp": "2024-05-02T10:00:00+08:00"
            }],
            "repository": repository,
            "pusher": sender.clone(),
            "sender": sender
        }),
        HookEventType::Issues => json!({
            "action": "label_updated",
            "number": 7,
            "issue": host_issue(),
            "repository": repository,
            "sender": sender
        }),
        HookEventType::IssueComment => json!({
            "action": "created",
            "issue": host_issue(),
            "comment": {
                "id": 42,
                "html_url": "https://git.example.com/acme/hookcard/issues/7#issuecomment-42",
                "user": host_user("bob", ""),
                "body": "Same here",
                "created_at": "2024-05-02T11:00:00+08:00",
                "updated_at": "2024-05-02T11:00:00+08:00"
            },
            "repository": repository,
            "sender": host_user("bob", "")
        }),
        HookEventType::PullRequest => json!({
            "action": "closed",
            "number": 8,
            "pull_request": {
                "id": 80,
                "number": 8,
                "user": host_user("bob", ""),
                "title": "Add cards",
                "body": "Adds action cards",
                "labels": [],
                "milestone": null,
                "assignee": null,
                "state": "closed",
                "comments": 0,
                "html_url": "https://git.example.com/acme/hookcard/pulls/8",
                "head_branch": "cards",
                "head_repo": host_repo("bob", "hookcard"),
                "base_branch": "main",
                "base_repo": repository.clone(),
                "mergeable": false,
                "merged": true,
                "merged_at": "2024-05-03T08:00:00+08:00",
                "merge_commit_sha": "3333333cccc",
                "merged_by": sender.clone()
            },
            "repository": repository,
            "sender": sender
        }),
        HookEventType::Release => json!({
            "action": "published",
            "release": {
                "id": 1,
                "tag_name": "v1.0.0",
                "target_commitish": "main",
                "name": "First release",
                "body": "Initial cut",
                "draft": false,
                "prerelease": false,
                "author": sender.clone(),
                "created_at": "2024-05-04T12:00:00+08:00"
            },
            "repository": repository,
            "sender": sender
        }),
    }
}
