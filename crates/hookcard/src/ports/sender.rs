//! Notification Delivery Port
//!
//! Abstract interface for posting encoded payloads to a provider endpoint.
//! Delivery is a single attempt; retry policy belongs to the caller.

use async_trait::async_trait;

use crate::domain::errors::HookError;

/// Delivery interface for encoded notification payloads
///
/// # Example
///
/// ```rust,ignore
/// use hookcard::NotificationSender;
///
/// struct HttpSender { /* reqwest client */ }
///
/// #[async_trait]
/// impl NotificationSender for HttpSender {
///     async fn send(&self, url: &str, body: Vec<u8>) -> Result<(), HookError> {
///         // POST body as application/json
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Post an encoded payload to `url`
    ///
    /// Non-success responses are reported as [`HookError::Delivery`].
    async fn send(&self, url: &str, body: Vec<u8>) -> Result<(), HookError>;
}
