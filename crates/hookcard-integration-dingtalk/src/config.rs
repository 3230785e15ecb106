//! DingTalk configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_NOTIFICATION_TITLE: &str = "Gogs Notification";

/// Layout of the card buttons
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BtnOrientation {
    #[default]
    Vertical,
    Horizontal,
}

impl BtnOrientation {
    /// Value expected by the `btnOrientation` field
    pub fn as_wire(&self) -> &'static str {
        match self {
            BtnOrientation::Vertical => "0",
            BtnOrientation::Horizontal => "1",
        }
    }
}

/// Configuration for DingTalk notifications
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DingtalkConfig {
    /// Card title shown in the conversation list
    #[serde(default = "default_title")]
    pub title: String,
    /// Hide the robot avatar on the card
    #[serde(default)]
    pub hide_avatar: bool,
    #[serde(default)]
    pub btn_orientation: BtnOrientation,
    /// Phone numbers to @-mention
    #[serde(default)]
    pub at_mobiles: Vec<String>,
    /// @-mention everyone in the group
    #[serde(default)]
    pub is_at_all: bool,
    /// Request timeout for delivery, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_title() -> String {
    DEFAULT_NOTIFICATION_TITLE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl DingtalkConfig {
    /// Create a configuration with a custom card title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_hide_avatar(mut self, hide: bool) -> Self {
        self.hide_avatar = hide;
        self
    }

    pub fn with_btn_orientation(mut self, orientation: BtnOrientation) -> Self {
        self.btn_orientation = orientation;
        self
    }

    /// Mention group members by phone number
    pub fn with_at_mobiles(mut self, mobiles: Vec<String>) -> Self {
        self.at_mobiles = mobiles;
        self
    }

    pub fn with_at_all(mut self, at_all: bool) -> Self {
        self.is_at_all = at_all;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DingtalkConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            hide_avatar: false,
            btn_orientation: BtnOrientation::default(),
            at_mobiles: Vec::new(),
            is_at_all: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}
