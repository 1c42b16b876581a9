//! OpenAI vision client (Chat Completions API).

use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;

use crate::providers::{ProviderError, VisionModel};

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f64 = 0.7;

/// OpenAI chat-completions client for single-image analysis.
pub struct OpenAiVision {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiVision {
    /// Build a client from `OPENAI_API_KEY`, with the model overridable
    /// via `OPENAI_VISION_MODEL`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| ProviderError::MissingApiKey {
            provider: "openai",
            var: "OPENAI_API_KEY",
        })?;
        let model =
            std::env::var("OPENAI_VISION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VisionModel for OpenAiVision {
    fn provider(&self) -> &'static str {
        "openai"
    }

    async fn analyze(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": prompt },
                    {
                        "type": "image_url",
                        "image_url": {
                            "url": format!("data:{};base64,{}", mime_type, encoded)
                        }
                    }
                ]
            }],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        log::debug!(
            "OpenAiVision.analyze: model={}, image_bytes={}",
            self.model,
            image.len()
        );

        let response = self
            .client
            .post(ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: "openai",
                source,
            })?;

        let status = response.status();
        let payload: Value = response.json().await.map_err(|source| ProviderError::Http {
            provider: "openai",
            source,
        })?;

        if !status.is_success() {
            let message = payload
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("unknown OpenAI API error")
                .to_string();
            return Err(ProviderError::Api {
                provider: "openai",
                message,
            });
        }

        payload
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ProviderError::EmptyReply { provider: "openai" })
    }
}
