//! # colorsense
//!
//! Seasonal color analysis service. A photo goes to a vision-capable
//! LLM (OpenAI or Gemini); the model's reply — clean JSON, fenced JSON,
//! truncated JSON, or plain prose — comes back through a tolerant
//! normalization layer as a stable, strongly-shaped
//! [`AnalysisSections`](analysis::AnalysisSections) record.
//!
//! The core (normalizer, palette renderer, color lexicon, fixtures) is
//! pure and synchronous; every record is built per request and shared
//! nothing. The provider clients and the axum front are the only
//! asynchronous parts.

pub mod analysis;
pub mod fixtures;
pub mod palette;
pub mod prompts;
pub mod providers;
pub mod server;

pub use analysis::{normalize, AnalysisSections};
pub use fixtures::{generate, FixtureKind, FixtureResponse};
pub use palette::{extract_colors_from_text, render_palette_html, ColorSwatch};
pub use prompts::{resolve_prompt, ANALYSIS_PROMPT};
pub use providers::{invoke, Provider, ProviderError};

/// Library version.
pub const VERSION: &str = "0.1.0";
