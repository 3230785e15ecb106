//! NotificationFormatter implementation for DingTalk

use hookcard::{HookError, HookEvent, NotificationFormatter};
use tracing::debug;

use crate::config::DingtalkConfig;
use crate::events::event_message;
use crate::payload::DingtalkPayload;

/// Formats repository events as DingTalk action cards
#[derive(Debug, Clone, Default)]
pub struct DingtalkFormatter {
    config: DingtalkConfig,
}

impl DingtalkFormatter {
    pub fn new(config: DingtalkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DingtalkConfig {
        &self.config
    }
}

impl NotificationFormatter for DingtalkFormatter {
    type Payload = DingtalkPayload;

    fn name(&self) -> &str {
        "dingtalk"
    }

    fn format(&self, event: &HookEvent) -> Result<DingtalkPayload, HookError> {
        debug!(
            event = %event.event_type(),
            repository = %event.repository().full_name,
            sender = %event.sender().handle(),
            "Formatting DingTalk action card"
        );

        let message = event_message(event);
        Ok(DingtalkPayload::action_card(&self.config, message))
    }

    fn encode(&self, payload: &DingtalkPayload) -> Result<Vec<u8>, HookError> {
        payload.to_json()
    }
}
