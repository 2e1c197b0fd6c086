use reqwest::Client;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum AiGatewayError {
    #[error("Rate limits exceeded, please try again later.")]
    RateLimited,
    #[error("Payment required, please add funds to your workspace.")]
    PaymentRequired,
    #[error("AI gateway error: {status}")]
    UpstreamStatus { status: u16, body: String },
    #[error("AI gateway request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the hosted chat-completions gateway backing the sommelier
/// functions.
pub struct AiGatewayClient {
    client: Client,
    gateway_url: String,
    api_key: String,
    model: String,
}

impl AiGatewayClient {
    pub fn new(gateway_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            gateway_url,
            api_key,
            model,
        }
    }

    /// Send one chat completion and return the model's reply text.
    ///
    /// `user_content` is either a plain string or the structured
    /// text-plus-image array the gateway accepts for vision requests. Returns
    /// `Ok(None)` when the reply carries no text content; callers treat that
    /// the same as unparseable output and substitute their fallback.
    pub async fn chat(
        &self,
        system_prompt: &str,
        user_content: Value,
    ) -> Result<Option<String>, AiGatewayError> {
        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_content},
            ],
        });

        let response = self
            .client
            .post(&self.gateway_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                429 => AiGatewayError::RateLimited,
                402 => AiGatewayError::PaymentRequired,
                code => {
                    let body = response.text().await.unwrap_or_default();
                    error!("AI gateway error: {code} {body}");
                    AiGatewayError::UpstreamStatus { status: code, body }
                }
            });
        }

        let body: Value = response.json().await?;
        let content = body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(content)
    }
}

/// Pull the JSON object out of a model reply: the slice from the first `{` to
/// the last `}`. `None` when no such slice exists or it fails to parse.
pub fn extract_json_object(content: &str) -> Option<Value> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&content[start..=end]).ok()
}
