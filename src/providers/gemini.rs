//! Google Gemini vision client (`generateContent`).
//!
//! Transient failures (429, 5xx, transport errors) are retried with
//! exponential backoff before giving up; client errors return
//! immediately.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;

use crate::providers::{ProviderError, VisionModel};

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const MAX_RETRIES: u32 = 2;

/// Gemini API client for single-image analysis.
pub struct GeminiVision {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiVision {
    /// Build a client from `GEMINI_API_KEY` (or `GOOGLE_API_KEY`), with
    /// the model overridable via `GEMINI_VISION_MODEL`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| ProviderError::MissingApiKey {
                provider: "gemini",
                var: "GEMINI_API_KEY",
            })?;
        let model =
            std::env::var("GEMINI_VISION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        )
    }
}

#[async_trait]
impl VisionModel for GeminiVision {
    fn provider(&self) -> &'static str {
        "gemini"
    }

    async fn analyze(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": prompt },
                    { "inline_data": { "mime_type": mime_type, "data": encoded } }
                ]
            }]
        });

        log::debug!(
            "GeminiVision.analyze: model={}, image_bytes={}",
            self.model,
            image.len()
        );

        let endpoint = self.endpoint();
        let mut last_error: Option<ProviderError> = None;
        let mut retry_delay = Duration::from_secs(1);

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                log::warn!("Gemini retry attempt {} after {:?}", attempt, retry_delay);
                tokio::time::sleep(retry_delay).await;
                retry_delay *= 2;
            }

            let response = match self
                .client
                .post(&endpoint)
                .query(&[("key", self.api_key.as_str())])
                .json(&body)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(source) => {
                    last_error = Some(ProviderError::Http {
                        provider: "gemini",
                        source,
                    });
                    continue;
                }
            };

            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                last_error = Some(ProviderError::Api {
                    provider: "gemini",
                    message: "rate limited (429)".to_string(),
                });
                continue;
            }

            if status.is_server_error() {
                last_error = Some(ProviderError::Api {
                    provider: "gemini",
                    message: format!("server error: {}", status),
                });
                continue;
            }

            let payload: Value = match response.json().await {
                Ok(json) => json,
                Err(source) => {
                    last_error = Some(ProviderError::Http {
                        provider: "gemini",
                        source,
                    });
                    continue;
                }
            };

            if let Some(error) = payload.get("error") {
                let message = error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown Gemini API error")
                    .to_string();
                return Err(ProviderError::Api {
                    provider: "gemini",
                    message,
                });
            }

            let text = payload
                .pointer("/candidates/0/content/parts")
                .and_then(Value::as_array)
                .map(|parts| {
                    parts
                        .iter()
                        .filter_map(|part| part.get("text").and_then(Value::as_str))
                        .collect::<Vec<_>>()
                        .join("")
                })
                .unwrap_or_default();

            if text.is_empty() {
                return Err(ProviderError::EmptyReply { provider: "gemini" });
            }

            return Ok(text);
        }

        Err(last_error.unwrap_or(ProviderError::Api {
            provider: "gemini",
            message: "request failed after retries".to_string(),
        }))
    }
}
