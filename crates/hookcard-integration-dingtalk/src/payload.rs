//! DingTalk wire schema
//!
//! Refer: https://open.dingtalk.com/document/robots/custom-robot-access
//! (message type `actionCard` with a single button).

use hookcard::{HookError, Message};
use serde::{Deserialize, Serialize};

use crate::config::DingtalkConfig;

/// Message-type discriminator for action cards
pub const MSG_TYPE_ACTION_CARD: &str = "actionCard";

/// Card with markdown text and one call-to-action button
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DingtalkActionCard {
    pub title: String,
    /// Markdown body
    pub text: String,
    pub hide_avatar: String,
    pub btn_orientation: String,
    pub single_title: String,
    #[serde(rename = "singleURL")]
    pub single_url: String,
}

/// Who to @-mention with the message
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DingtalkAt {
    pub at_mobiles: Vec<String>,
    pub is_at_all: bool,
}

/// Request body for a DingTalk robot webhook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DingtalkPayload {
    pub msgtype: String,
    pub at: DingtalkAt,
    #[serde(rename = "actionCard")]
    pub action_card: DingtalkActionCard,
}

impl DingtalkPayload {
    /// Wrap a formatted message into an action card
    ///
    /// The card body is the message heading followed by its lines; the single
    /// button points at the message link.
    pub fn action_card(config: &DingtalkConfig, message: Message) -> Self {
        let text = message.markdown_body();

        Self {
            msgtype: MSG_TYPE_ACTION_CARD.to_string(),
            at: DingtalkAt {
                at_mobiles: config.at_mobiles.clone(),
                is_at_all: config.is_at_all,
            },
            action_card: DingtalkActionCard {
                title: config.title.clone(),
                text,
                hide_avatar: if config.hide_avatar { "1" } else { "0" }.to_string(),
                btn_orientation: config.btn_orientation.as_wire().to_string(),
                single_title: message.link.text,
                single_url: message.link.url,
            },
        }
    }

    /// Encode as indented JSON
    pub fn to_json(&self) -> Result<Vec<u8>, HookError> {
        serde_json::to_vec_pretty(self).map_err(|e| HookError::Encoding(e.to_string()))
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, HookError> {
        serde_json::from_slice(bytes).map_err(|e| HookError::Encoding(e.to_string()))
    }
}
