//! Response normalization: arbitrary model text into [`AnalysisSections`].
//!
//! Replies arrive in every shape a vision model can produce: clean JSON,
//! JSON wrapped in markdown fences, truncated JSON, or plain prose. The
//! normalizer absorbs all of them and never propagates an error to the
//! caller — any internal failure degrades to the heuristic line scan,
//! and if that too yields nothing useful the result is an all-empty
//! record with `full_response` preserved.
//!
//! # Pipeline
//!
//! 1. Strip a `json`-tagged markdown fence, or failing that any fence.
//! 2. Slice the outermost `{` … `}` pair and try a JSON decode.
//! 3. On decode failure or no braces, fall back to the line scanner.
//!
//! `full_response` always carries the untouched input, whichever path
//! produced the rest.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::analysis::{heuristic, AnalysisSections};
use crate::palette::render_palette_html;

/// Sentinel `error` value a model returns when it wants a better photo
/// instead of producing an analysis.
pub const CLARIFYING_QUESTION: &str = "clarifying_question";

static JSON_FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\s*").unwrap());
static ANY_FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*").unwrap());
static FENCE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*$").unwrap());

/// Which strategy decoded the reply.
///
/// A single mapping step downstream builds [`AnalysisSections`] from
/// whichever tag is present, so the fallback logic lives in exactly one
/// place.
enum DecodedReply {
    /// The reply carried a parseable JSON document.
    Structured(Value),
    /// No parseable JSON; the fence-stripped text goes to the line
    /// scanner.
    Heuristic(String),
}

/// Normalize a raw model reply into a complete [`AnalysisSections`].
///
/// Infallible by contract: every string input — empty, whitespace,
/// truncated JSON, multi-paragraph prose — yields a well-formed record.
pub fn normalize(raw_text: &str) -> AnalysisSections {
    let mut sections = match decode(raw_text) {
        DecodedReply::Structured(data) => map_structured(&data),
        DecodedReply::Heuristic(text) => {
            let mut scanned = AnalysisSections::default();
            heuristic::scan(&text, &mut scanned);
            scanned
        }
    };
    sections.full_response = raw_text.to_string();
    sections
}

fn decode(raw_text: &str) -> DecodedReply {
    let cleaned = strip_fences(raw_text);
    match json_candidate(&cleaned) {
        Some(candidate) => match serde_json::from_str::<Value>(candidate) {
            Ok(data) => DecodedReply::Structured(data),
            Err(err) => {
                log::debug!("structured decode failed, using line scan: {}", err);
                DecodedReply::Heuristic(cleaned)
            }
        },
        None => DecodedReply::Heuristic(cleaned),
    }
}

/// Remove a markdown code fence wrapping the reply.
///
/// A `json`-tagged fence wins over a generic one; only the first opening
/// fence and the trailing closing fence are removed. Text without fences
/// passes through unchanged.
fn strip_fences(text: &str) -> String {
    if text.contains("```json") {
        let opened = JSON_FENCE_OPEN.replace(text, "");
        FENCE_CLOSE.replace(&opened, "").into_owned()
    } else if text.contains("```") {
        let opened = ANY_FENCE_OPEN.replace(text, "");
        FENCE_CLOSE.replace(&opened, "").into_owned()
    } else {
        text.to_string()
    }
}

/// Slice the outermost brace pair: first `{` through last `}`.
///
/// Nested objects stay inside the candidate; `None` when either brace is
/// missing or the last `}` precedes the first `{`.
fn json_candidate(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Map a decoded JSON document onto the canonical record.
///
/// Missing keys become empty strings, never absent fields. The
/// clarification sentinel short-circuits: only `error` and `question`
/// are carried, observations and recommendations stay empty.
fn map_structured(data: &Value) -> AnalysisSections {
    let mut sections = AnalysisSections::default();

    if is_clarification(data) {
        sections.error = str_field(data, "error");
        sections.question = str_field(data, "question");
        return sections;
    }

    sections.observations.overall_type = str_field(data, "seasonal_type");

    let analysis = &data["analysis"];
    sections.observations.skin_tone = str_field(analysis, "skin_tone");
    sections.observations.undertone = str_field(analysis, "undertone");
    sections.observations.contrast = str_field(analysis, "contrast");

    let recommendations = &data["recommendations"];
    let fashion = &recommendations["fashion_colors"];
    sections.fashion_colors.excellent_choices = str_field(fashion, "best_colors_description");
    sections.fashion_colors.hair_colors = str_field(recommendations, "hair_color");

    let makeup = &recommendations["makeup"];
    sections.fashion_colors.makeup.blush = str_field(makeup, "blush");
    sections.fashion_colors.makeup.lipstick = str_field(makeup, "lipstick");
    sections.fashion_colors.makeup.eyeshadow = str_field(makeup, "eyeshadow");

    sections.reasoning = str_field(data, "final_encouragement");

    let hex_codes = hex_list(&fashion["color_palette_hex"]);
    if !hex_codes.is_empty() {
        sections.fashion_colors_palette = render_palette_html(&hex_codes);
    }

    sections
}

/// The sentinel shape: `error` and `question` keys present, no
/// `seasonal_type`.
fn is_clarification(data: &Value) -> bool {
    data.get("error").is_some()
        && data.get("question").is_some()
        && data.get("seasonal_type").is_none()
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn hex_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_JSON: &str = r##"{
  "seasonal_type": "Warm Autumn",
  "analysis": {
    "skin_tone": "Medium with golden undertones",
    "undertone": "Warm",
    "contrast": "Medium"
  },
  "recommendations": {
    "fashion_colors": {
      "best_colors_description": "Earthy, rich colors.",
      "color_palette_hex": ["#C19A6B", "#6B8E23"]
    },
    "hair_color": "Warm browns.",
    "makeup": {
      "blush": "Peachy tones.",
      "lipstick": "Terracotta.",
      "eyeshadow": "Golden browns."
    }
  },
  "final_encouragement": "Rich tones will make you glow!"
}"##;

    #[test]
    fn test_structured_path_maps_all_fields() {
        let sections = normalize(MINIMAL_JSON);
        assert_eq!(sections.observations.overall_type, "Warm Autumn");
        assert_eq!(sections.observations.skin_tone, "Medium with golden undertones");
        assert_eq!(sections.observations.undertone, "Warm");
        assert_eq!(sections.observations.contrast, "Medium");
        assert_eq!(sections.fashion_colors.excellent_choices, "Earthy, rich colors.");
        assert_eq!(sections.fashion_colors.hair_colors, "Warm browns.");
        assert_eq!(sections.fashion_colors.makeup.blush, "Peachy tones.");
        assert_eq!(sections.fashion_colors.makeup.lipstick, "Terracotta.");
        assert_eq!(sections.fashion_colors.makeup.eyeshadow, "Golden browns.");
        assert_eq!(sections.reasoning, "Rich tones will make you glow!");
        assert!(sections.fashion_colors_palette.contains("Camel"));
        assert_eq!(sections.full_response, MINIMAL_JSON);
    }

    #[test]
    fn test_fence_tolerance() {
        let fenced = format!("```json\n{}\n```", MINIMAL_JSON);
        let plain = normalize(MINIMAL_JSON);
        let wrapped = normalize(&fenced);
        // Everything matches except full_response, which keeps the fenced
        // original.
        assert_eq!(wrapped.observations, plain.observations);
        assert_eq!(wrapped.fashion_colors, plain.fashion_colors);
        assert_eq!(wrapped.reasoning, plain.reasoning);
        assert_eq!(wrapped.fashion_colors_palette, plain.fashion_colors_palette);
        assert_eq!(wrapped.full_response, fenced);
    }

    #[test]
    fn test_generic_fence_tolerance() {
        let fenced = format!("```\n{}\n```", MINIMAL_JSON);
        let wrapped = normalize(&fenced);
        assert_eq!(wrapped.observations.overall_type, "Warm Autumn");
        assert_eq!(wrapped.full_response, fenced);
    }

    #[test]
    fn test_outer_brace_selection() {
        let sections = normalize(r#"text before {"a": {"b": 1}} text after"#);
        // The candidate parsed was the outermost object, so the structured
        // path ran and produced an empty (but well-formed) record.
        assert_eq!(sections.observations.overall_type, "");
        assert_eq!(sections.full_response, r#"text before {"a": {"b": 1}} text after"#);
    }

    #[test]
    fn test_never_panics_on_hostile_input() {
        for input in [
            "",
            "   \n\t  ",
            r#"{"seasonal_type": "Warm"#,
            "Just a couple of paragraphs of prose.\n\nNothing structured at all.",
            "}{",
            "{}",
        ] {
            let sections = normalize(input);
            assert_eq!(sections.full_response, input);
        }
    }

    #[test]
    fn test_truncated_json_falls_back_to_scan() {
        let input = "{\"seasonal_type\": \"Warm\nUndertone: warm and golden";
        let sections = normalize(input);
        assert_eq!(sections.observations.undertone, "Undertone: warm and golden");
    }

    #[test]
    fn test_clarification_short_circuit() {
        let sections =
            normalize(r#"{"error": "clarifying_question", "question": "Is this a selfie?"}"#);
        assert_eq!(sections.error, CLARIFYING_QUESTION);
        assert_eq!(sections.question, "Is this a selfie?");
        assert!(sections.is_clarification());
        assert_eq!(sections.observations, Default::default());
        assert_eq!(sections.fashion_colors, Default::default());
    }

    #[test]
    fn test_seasonal_type_beats_sentinel_check() {
        // A full analysis that merely *contains* error/question keys is not
        // a clarification.
        let sections = normalize(
            r#"{"seasonal_type": "Cool Winter", "error": "none", "question": "n/a"}"#,
        );
        assert_eq!(sections.observations.overall_type, "Cool Winter");
        assert!(!sections.is_clarification());
    }

    #[test]
    fn test_empty_palette_hex_leaves_palette_empty() {
        let sections = normalize(
            r#"{"seasonal_type": "Soft Summer", "recommendations": {"fashion_colors": {"color_palette_hex": []}}}"#,
        );
        assert_eq!(sections.fashion_colors_palette, "");
    }
}
