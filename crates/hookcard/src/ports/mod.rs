//! Ports (Interfaces)
//!
//! Abstract interfaces that providers implement to render and deliver
//! notifications.
//!
//! Implementations of these traits live in the integration crates.

pub mod formatter;
pub mod sender;

// Re-exports
pub use formatter::*;
pub use sender::*;
