//! Hookcard Domain Library
//!
//! Core types and interfaces for turning repository lifecycle events into
//! chat notifications.
//!
//! # Architecture
//!
//! This crate follows the same ports-and-adapters split as its integrations:
//!
//! - **Domain Layer** (`domain/`): Pure event model and message types
//!   - `entities/`: Repository, user, issue, commit and release records, the
//!     event payloads built from them, and the provider-neutral `Message`
//!   - `value_objects/`: Event tags and action kinds
//!   - `errors/`: Error type shared by every provider
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `formatter`: Event to provider payload
//!   - `sender`: Delivery of encoded payloads
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookcard::{HookEvent, HookEventType, NotificationFormatter};
//!
//! let event = HookEvent::from_parts(HookEventType::Push, &data)?;
//! let payload = formatter.format(&event)?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    markdown_link, ref_short_name, title_case, Comment, CommentAction, Commit, CommitUser,
    CreatePayload, DeletePayload, ForkPayload, HookError, HookEvent, HookEventType, Issue,
    IssueAction, IssueCommentPayload, IssuesPayload, Label, Link, Message, Milestone,
    PullRequest, PullRequestPayload, PushPayload, RefType, Release, ReleaseAction,
    ReleasePayload, Repository, User,
};
pub use ports::{NotificationFormatter, NotificationSender};
