//! Notification Formatter Port
//!
//! Abstract interface for turning repository events into a chat provider's
//! wire payload.
//!
//! Implementations of this trait should live in separate crates
//! (e.g., hookcard-integration-dingtalk).

use serde::Serialize;

use crate::domain::entities::HookEvent;
use crate::domain::errors::HookError;

/// Provider-aware event formatter
///
/// `format` is the typed entry point and covers every event variant.
/// `build_payload` is the tag-driven dispatcher used when events arrive as
/// `(tag, json)` pairs from the hosting application.
///
/// # Example
///
/// ```rust,ignore
/// use hookcard::NotificationFormatter;
///
/// struct SlackFormatter { /* ... */ }
///
/// impl NotificationFormatter for SlackFormatter {
///     type Payload = SlackPayload;
///
///     fn name(&self) -> &str { "slack" }
///
///     fn format(&self, event: &HookEvent) -> Result<SlackPayload, HookError> {
///         // Match on the event and build the payload
///     }
/// }
/// ```
pub trait NotificationFormatter: Send + Sync {
    /// Wire schema produced by this provider
    type Payload: Serialize;

    /// Provider name (e.g., "dingtalk")
    fn name(&self) -> &str;

    /// Build the provider payload for an event
    fn format(&self, event: &HookEvent) -> Result<Self::Payload, HookError>;

    /// Select the formatter for `tag` and build its payload
    ///
    /// Fails with [`HookError::UnsupportedEvent`] for a tag outside the
    /// supported set; no partial payload is produced.
    fn build_payload(
        &self,
        tag: &str,
        data: &serde_json::Value,
    ) -> Result<Self::Payload, HookError> {
        let event = HookEvent::from_tagged(tag, data)?;
        self.format(&event)
    }

    /// Encode a payload as indented JSON
    fn encode(&self, payload: &Self::Payload) -> Result<Vec<u8>, HookError> {
        serde_json::to_vec_pretty(payload).map_err(HookError::from)
    }

    /// Dispatch, format and encode in one step
    fn render(&self, tag: &str, data: &serde_json::Value) -> Result<Vec<u8>, HookError> {
        let payload = self.build_payload(tag, data)?;
        self.encode(&payload)
    }
}
