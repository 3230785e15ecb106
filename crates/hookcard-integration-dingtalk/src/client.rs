//! DingTalk robot webhook client

use async_trait::async_trait;
use hookcard::{HookError, NotificationSender};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::DingtalkConfig;
use crate::payload::DingtalkPayload;

/// Body returned by the robot endpoint
///
/// DingTalk answers HTTP 200 even for rejected messages and reports the
/// outcome in `errcode`.
#[derive(Debug, Deserialize)]
struct RobotResponse {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

/// Posts encoded payloads to a DingTalk robot webhook
///
/// Each call is a single attempt.
pub struct DingtalkClient {
    client: Client,
}

impl DingtalkClient {
    pub fn new(config: &DingtalkConfig) -> Result<Self, HookError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("hookcard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HookError::Delivery(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Encode and post a payload
    pub async fn send_payload(
        &self,
        url: &str,
        payload: &DingtalkPayload,
    ) -> Result<(), HookError> {
        let body = payload.to_json()?;
        self.send(url, body).await
    }
}

async fn read_body(response: reqwest::Response) -> Result<String, HookError> {
    response.text().await.map_err(|e| {
        error!(error = %e, "Failed to read DingTalk response");
        HookError::Delivery(format!("Failed to read DingTalk response: {e}"))
    })
}

/// Interpret the robot endpoint's answer
fn check_response(status: u16, body: &str) -> Result<(), HookError> {
    if !(200..300).contains(&status) {
        return Err(HookError::Delivery(format!(
            "DingTalk returned HTTP {}: {}",
            status, body
        )));
    }

    // Some gateways answer with an empty body
    if body.trim().is_empty() {
        return Ok(());
    }

    let response: RobotResponse = serde_json::from_str(body)
        .map_err(|e| HookError::Delivery(format!("Unexpected DingTalk response: {e}")))?;

    if response.errcode != 0 {
        return Err(HookError::Delivery(format!(
            "DingTalk rejected message ({}): {}",
            response.errcode, response.errmsg
        )));
    }

    Ok(())
}

#[async_trait]
impl NotificationSender for DingtalkClient {
    async fn send(&self, url: &str, body: Vec<u8>) -> Result<(), HookError> {
        debug!(body_len = %body.len(), "Posting DingTalk action card");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach DingTalk");
                HookError::Delivery(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = read_body(response).await?;

        check_response(status, &text)
            .inspect_err(|e| error!(status = %status, error = %e, "DingTalk delivery failed"))?;

        info!(status = %status, "DingTalk action card delivered");
        Ok(())
    }
}
