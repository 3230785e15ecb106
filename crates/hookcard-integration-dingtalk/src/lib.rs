//! DingTalk Integration for Hookcard
//!
//! Renders repository events as DingTalk "action card" messages and posts
//! them to a group robot webhook.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookcard::NotificationFormatter;
//! use hookcard_integration_dingtalk::{DingtalkConfig, DingtalkFormatter};
//!
//! let formatter = DingtalkFormatter::new(DingtalkConfig::default());
//! let bytes = formatter.render("push", &event_json)?;
//! ```

mod client;
mod config;
mod events;
mod formatter;
mod payload;

#[cfg(test)]
mod fixtures;

pub use client::DingtalkClient;
pub use config::{BtnOrientation, DingtalkConfig, DEFAULT_NOTIFICATION_TITLE};
pub use events::event_message;
pub use formatter::DingtalkFormatter;
pub use payload::{DingtalkActionCard, DingtalkAt, DingtalkPayload, MSG_TYPE_ACTION_CARD};
