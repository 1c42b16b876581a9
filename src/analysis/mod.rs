//! Canonical analysis record and the normalization pipeline around it.
//!
//! [`AnalysisSections`] is the one shape every reply converges to, no
//! matter how well- or ill-formed the model's text was. The normalizer
//! produces it, the fixture generator reproduces it, and the HTTP layer
//! serializes it as `parsed_analysis`.

pub mod heuristic;
pub mod normalizer;

use serde::{Deserialize, Serialize};

pub use normalizer::{normalize, CLARIFYING_QUESTION};

/// Per-feature observations pulled from the reply.
///
/// Every field is an empty string — never null or absent — when the model
/// did not determine it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observations {
    pub skin_tone: String,
    pub undertone: String,
    pub contrast: String,
    /// Seasonal color type, e.g. "Warm Autumn".
    pub overall_type: String,
}

/// Makeup recommendations, split by product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Makeup {
    pub blush: String,
    pub lipstick: String,
    pub eyeshadow: String,
}

/// Wardrobe and styling recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FashionColors {
    pub excellent_choices: String,
    pub hair_colors: String,
    pub makeup: Makeup,
}

/// The canonical output of response normalization.
///
/// Constructed per request, immutable once built, discarded after the
/// response is sent. Downstream rendering reads fields directly by name
/// and must tolerate every one of them being empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSections {
    pub observations: Observations,
    /// Free-text justification / encouragement. Possibly multi-line.
    pub reasoning: String,
    pub fashion_colors: FashionColors,
    /// Rendered swatch markup, or empty when no hex codes were found.
    pub fashion_colors_palette: String,
    pub disclaimer: String,
    /// The exact bytes handed to the normalizer, preserved verbatim for
    /// audit display regardless of parse success.
    pub full_response: String,
    /// Set when the model signaled it needs clarification instead of
    /// producing an analysis. When non-empty, consumers must prefer
    /// `error`/`question` over every other field.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
    /// The follow-up question accompanying a clarification signal.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub question: String,
}

impl AnalysisSections {
    /// An all-empty record carrying only the verbatim reply text.
    pub fn empty(raw_text: &str) -> Self {
        Self {
            full_response: raw_text.to_string(),
            ..Self::default()
        }
    }

    /// Whether the model asked a clarifying question instead of analyzing.
    pub fn is_clarification(&self) -> bool {
        !self.error.is_empty()
    }
}
