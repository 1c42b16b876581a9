//! Vision provider clients.
//!
//! Thin adapters over the OpenAI and Gemini vision APIs. Each client
//! sends one image plus the analysis prompt and returns the provider's
//! raw textual reply verbatim — markdown fences, stray prose and all.
//! Making sense of that text is the normalizer's job, never this
//! layer's.
//!
//! Only I/O and configuration problems surface here as errors;
//! text-shape problems are not errors anywhere in this crate.

pub mod gemini;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which vision API serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            other => Err(ProviderError::UnknownProvider {
                name: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the provider layer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Credentials were absent at client construction. Raised before any
    /// network I/O.
    #[error("{provider} API key not configured. Set the {var} environment variable or use test mode.")]
    MissingApiKey {
        provider: &'static str,
        var: &'static str,
    },

    #[error("unknown provider: {name}")]
    UnknownProvider { name: String },

    #[error("{provider} request failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned no analysis text")]
    EmptyReply { provider: &'static str },
}

/// A vision-capable model endpoint.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Provider name for logs and error messages.
    fn provider(&self) -> &'static str;

    /// Analyze one image, returning the model's reply text verbatim.
    async fn analyze(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, ProviderError>;
}

/// Build a client for `provider` from environment credentials.
///
/// # Errors
///
/// Fails with [`ProviderError::MissingApiKey`] when the provider's key
/// is not set.
pub fn client_from_env(provider: Provider) -> Result<Box<dyn VisionModel>, ProviderError> {
    match provider {
        Provider::OpenAi => Ok(Box::new(openai::OpenAiVision::from_env()?)),
        Provider::Gemini => Ok(Box::new(gemini::GeminiVision::from_env()?)),
    }
}

/// Send an image to `provider` and return its raw reply.
pub async fn invoke(
    provider: Provider,
    image: &[u8],
    mime_type: &str,
    prompt: &str,
) -> Result<String, ProviderError> {
    let client = client_from_env(provider)?;
    client.analyze(image, mime_type, prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_provider_from_str() {
        assert_eq!(Provider::from_str("openai").unwrap(), Provider::OpenAi);
        assert_eq!(Provider::from_str("Gemini").unwrap(), Provider::Gemini);
        assert!(Provider::from_str("claude").is_err());
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(Provider::OpenAi.to_string(), "openai");
        assert_eq!(Provider::Gemini.to_string(), "gemini");
    }
}
