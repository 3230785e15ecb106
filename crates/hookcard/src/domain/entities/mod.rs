//! Domain Entities
//!
//! Records embedded in webhook payloads and the events built from them.
//! - Repository / User: identity and web URLs
//! - Commit: pushed commits
//! - Issue / PullRequest / Comment / Label / Milestone
//! - Release: published releases
//! - HookEvent: tagged union over every supported event payload
//! - Message: provider-neutral notification body

mod commit;
mod event;
mod issue;
mod message;
mod release;
mod repository;

pub use commit::*;
pub use event::*;
pub use issue::*;
pub use message::*;
pub use release::*;
pub use repository::*;
