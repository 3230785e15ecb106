//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod action;
mod event_type;
mod ref_type;

pub use action::*;
pub use event_type::*;
pub use ref_type::*;
