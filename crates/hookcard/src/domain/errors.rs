//! Domain Errors
//!
//! Error types for notification formatting and delivery.

use thiserror::Error;

/// Errors raised while turning an event into a notification
#[derive(Debug, Error)]
pub enum HookError {
    #[error("Unsupported event: {event:?}")]
    UnsupportedEvent { event: String },

    #[error("Invalid payload for {event} event: {message}")]
    InvalidPayload { event: String, message: String },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl HookError {
    pub fn unsupported<T: AsRef<str>>(event: T) -> Self {
        Self::UnsupportedEvent {
            event: event.as_ref().to_string(),
        }
    }

    pub fn invalid_payload<T: AsRef<str>, M: std::fmt::Display>(event: T, message: M) -> Self {
        Self::InvalidPayload {
            event: event.as_ref().to_string(),
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
