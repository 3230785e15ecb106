//! Event formatters
//!
//! One function per event kind, each producing a provider-neutral
//! [`Message`]: title, ordered markdown lines, and the card's primary link.

use hookcard::{
    markdown_link, ref_short_name, title_case, CommentAction, CreatePayload, DeletePayload,
    ForkPayload, HookEvent, IssueAction, IssueCommentPayload, IssuesPayload, Label, Link, Message,
    Milestone, PullRequestPayload, PushPayload, ReleasePayload, Repository, User,
};

/// Build the message for any supported event
pub fn event_message(event: &HookEvent) -> Message {
    match event {
        HookEvent::Create(p) => create_message(p),
        HookEvent::Delete(p) => delete_message(p),
        HookEvent::Fork(p) => fork_message(p),
        HookEvent::Push(p) => push_message(p),
        HookEvent::Issues(p) => issues_message(p),
        HookEvent::IssueComment(p) => issue_comment_message(p),
        HookEvent::PullRequest(p) => pull_request_message(p),
        HookEvent::Release(p) => release_message(p),
    }
}

fn repo_line(label: &str, repo: &Repository) -> String {
    format!("- {}: **{}**", label, markdown_link(&repo.html_url, &repo.name))
}

/// Extra line for assignment, milestone and label changes
fn action_line(
    action: IssueAction,
    assignee: Option<&User>,
    milestone: Option<&Milestone>,
    labels: &[Label],
) -> Option<String> {
    match action {
        IssueAction::Assigned => Some(format!(
            "- New Assignee: **{}**",
            assignee.map(User::handle).unwrap_or_default()
        )),
        IssueAction::Milestoned => Some(format!(
            "- New Milestone: **{}**",
            milestone.map(|m| m.title.as_str()).unwrap_or_default()
        )),
        IssueAction::LabelUpdated => {
            if labels.is_empty() {
                Some("- Labels: **empty**".to_string())
            } else {
                let names: Vec<String> = labels.iter().map(|l| format!("**{}**", l.name)).collect();
                Some(format!("- Labels: {}", names.join(",")))
            }
        }
        _ => None,
    }
}

fn quote(body: &str) -> String {
    format!("> {}", body)
}

fn create_message(p: &CreatePayload) -> Message {
    let ref_name = ref_short_name(&p.reference);
    let ref_type = title_case(&p.ref_type.to_string());
    let ref_url = p.repository.src_url(ref_name);

    Message::new(
        format!("New {} Create Event", ref_type),
        Link::new(format!("View {}", ref_type), ref_url.clone()),
    )
    .with_line(repo_line("Repo", &p.repository))
    .with_line(format!(
        "- New {}: **{}**",
        ref_type,
        markdown_link(&ref_url, ref_name)
    ))
}

fn delete_message(p: &DeletePayload) -> Message {
    let ref_name = ref_short_name(&p.reference);
    let ref_type = title_case(&p.ref_type.to_string());

    // The ref is gone, so it is not linked
    Message::new(
        format!("{} Delete Event", ref_type),
        Link::new("View Repo", p.repository.html_url.clone()),
    )
    .with_line(repo_line("Repo", &p.repository))
    .with_line(format!("- {}: **{}**", ref_type, ref_name))
}

fn fork_message(p: &ForkPayload) -> Message {
    Message::new(
        "Repo Fork Event",
        Link::new("View Fork", p.forkee.html_url.clone()),
    )
    .with_line(repo_line("From Repo", &p.repository))
    .with_line(format!(
        "- To Repo: **{}**",
        markdown_link(&p.forkee.html_url, &p.forkee.full_name)
    ))
}

fn push_message(p: &PushPayload) -> Message {
    let ref_name = ref_short_name(&p.reference);

    let mut message = Message::new(
        "Repo Push Event",
        Link::new("View Changes", p.compare_url.clone()),
    )
    .with_line(repo_line("Repo", &p.repository))
    .with_line(format!("- Pusher: **{}**", p.pusher.display_name()))
    .with_line(format!(
        "- Ref: **{}**",
        markdown_link(&p.repository.src_url(ref_name), ref_name)
    ))
    .with_line(format!("## Total {} commits(s)", p.commits.len()));

    for (i, commit) in p.commits.iter().enumerate() {
        message.push_line(format!(
            "> {}. {} {} - {}",
            i,
            markdown_link(&commit.url, commit.short_id()),
            commit.author.name,
            commit.summary()
        ));
    }

    message
}

fn issues_message(p: &IssuesPayload) -> Message {
    let issue_name = format!("#{} {}", p.number, p.issue.title);
    let issue_url = p.repository.issue_url(p.number);

    let mut message = Message::new(
        format!("Issue Event {}", title_case(p.action.as_str())),
        Link::new("View Issue", issue_url.clone()),
    )
    .with_line(repo_line("Repo", &p.repository))
    .with_line(format!(
        "- Issue: **{}**",
        markdown_link(&issue_url, &issue_name)
    ));

    if let Some(line) = action_line(
        p.action,
        p.issue.assignee.as_ref(),
        p.issue.milestone.as_ref(),
        &p.issue.labels,
    ) {
        message.push_line(line);
    }

    if !p.issue.body.is_empty() {
        message.push_line(quote(&p.issue.body));
    }

    message
}

fn issue_comment_message(p: &IssueCommentPayload) -> Message {
    let issue_name = format!("#{} {}", p.issue.number, p.issue.title);
    let issue_url = p.repository.issue_url(p.issue.number);

    // A deleted comment has no anchor left on the page
    let comment_url = match p.action {
        CommentAction::Deleted => issue_url.clone(),
        _ => format!("{}#{}", issue_url, p.comment.hash_tag()),
    };

    Message::new(
        format!("Issue Comment {}", title_case(&p.action.to_string())),
        Link::new("View Issue Comment", comment_url.clone()),
    )
    .with_line(repo_line("Repo", &p.repository))
    .with_line(format!("- Issue: {}", markdown_link(&issue_url, &issue_name)))
    .with_line(format!("- Comment: {}", markdown_link(&comment_url, "Permalink")))
    .with_line("- Comment content:")
    .with_line(quote(&p.comment.body))
}

fn pull_request_message(p: &PullRequestPayload) -> Message {
    let title = if p.action == IssueAction::Closed && p.pull_request.merged {
        "Pull Request Merged".to_string()
    } else {
        format!("Pull Request {}", title_case(p.action.as_str()))
    };
    let pull_request_url = p.repository.pull_url(p.number);
    let pull_request_name = format!("#{} {}", p.number, p.pull_request.title);

    let mut message = Message::new(title, Link::new("View Pull Request", pull_request_url.clone()))
        .with_line(repo_line("Repo", &p.repository))
        .with_line(format!(
            "- PR: {}",
            markdown_link(&pull_request_url, &pull_request_name)
        ));

    if let Some(line) = action_line(
        p.action,
        p.pull_request.assignee.as_ref(),
        p.pull_request.milestone.as_ref(),
        &p.pull_request.labels,
    ) {
        message.push_line(line);
    }

    if matches!(p.action, IssueAction::Opened | IssueAction::Edited) {
        message.push_line(quote(&p.pull_request.body));
    }

    message
}

fn release_message(p: &ReleasePayload) -> Message {
    let release = &p.release;
    let release_url = p.repository.src_url(&release.tag_name);

    let mut message = Message::new(
        "New Release Published",
        Link::new("View Release", release_url.clone()),
    )
    .with_line(repo_line("Repo", &p.repository))
    .with_line(format!("- Tag: {}", markdown_link(&release_url, &release.tag_name)))
    .with_line(format!("- Author: {}", release.author.display_name()))
    .with_line(format!("- Draft?: {}", release.draft))
    .with_line(format!("- Pre Release?: {}", release.prerelease))
    .with_line(format!("- Title: {}", release.name));

    if !release.body.is_empty() {
        message.push_line("- Note:");
        message.push_line(quote(&release.body));
    }

    message
}
