//! Palette rendering.
//!
//! Turns an ordered list of hex codes (or free text mentioning colors)
//! into a presentation-ready swatch structure. The rendered markup is
//! what the web layer injects next to the written recommendation; the
//! extraction variant backs replies that never produced hex codes.

pub mod lexicon;

use serde::{Deserialize, Serialize};

use crate::palette::lexicon::{color_name, TEXT_COLOR_VOCABULARY};

/// Maximum number of swatches a palette carries. Extra input entries are
/// silently ignored.
pub const MAX_SWATCHES: usize = 8;

/// A single named color swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    /// Hex code as supplied by the source, e.g. `#C19A6B`.
    pub hex: String,
    /// Display name resolved through the lexicon.
    pub name: String,
}

/// Render an ordered hex list into palette markup.
///
/// Input order is preserved and the list is capped at [`MAX_SWATCHES`].
/// Display names come from the lexicon, falling back to `"Color <hex>"`
/// for unknown codes. An empty input renders to an empty string.
pub fn render_palette_html(hex_codes: &[String]) -> String {
    if hex_codes.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"color-palette\">");
    html.push_str("<h5>Recommended Color Palette:</h5>");
    html.push_str("<div class=\"color-swatches\">");

    for hex in hex_codes.iter().take(MAX_SWATCHES) {
        let name = color_name(hex);
        html.push_str(&format!(
            "<div class=\"color-swatch\" title=\"{}\"><div class=\"color-preview\" style=\"background-color: {}\"></div><div class=\"color-name\">{}</div></div>",
            name, hex, name
        ));
    }

    html.push_str("</div></div>");
    html
}

/// Extract known color mentions from free text.
///
/// The text is lowercased once and every vocabulary phrase is tested by
/// substring containment. Matches are reported in the vocabulary's
/// declaration order — not the order of appearance in the text — and the
/// result is capped at [`MAX_SWATCHES`]. Names are the phrase with its
/// first character uppercased.
pub fn extract_colors_from_text(text: &str) -> Vec<ColorSwatch> {
    let lowered = text.to_lowercase();
    let mut swatches = Vec::new();

    for &(phrase, hex) in TEXT_COLOR_VOCABULARY {
        if lowered.contains(phrase) {
            swatches.push(ColorSwatch {
                hex: hex.to_string(),
                name: title_case(phrase),
            });
        }
        if swatches.len() == MAX_SWATCHES {
            break;
        }
    }

    swatches
}

fn title_case(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_render_empty_input() {
        assert_eq!(render_palette_html(&[]), "");
    }

    #[test]
    fn test_render_caps_at_eight_in_order() {
        let input = hexes(&[
            "#000001", "#000002", "#000003", "#000004", "#000005", "#000006", "#000007",
            "#000008", "#000009", "#00000A", "#00000B", "#00000C",
        ]);
        let html = render_palette_html(&input);
        assert_eq!(html.matches("color-swatch\"").count(), 8);
        assert!(html.contains("#000008"));
        assert!(!html.contains("#000009"));
        // First entry renders before the last kept entry.
        assert!(html.find("#000001").unwrap() < html.find("#000008").unwrap());
    }

    #[test]
    fn test_render_unknown_hex_gets_fallback_name() {
        let html = render_palette_html(&hexes(&["#123456"]));
        assert!(html.contains("Color #123456"));
    }

    #[test]
    fn test_extract_reports_vocabulary_order() {
        // "navy blue" appears first in the text but "camel" is declared
        // first in the vocabulary; declaration order wins.
        let swatches = extract_colors_from_text("I love navy blue and also camel coats");
        let names: Vec<&str> = swatches.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Camel", "Navy blue"]);
    }

    #[test]
    fn test_extract_title_cases_first_char_only() {
        let swatches = extract_colors_from_text("try olive green");
        assert_eq!(swatches[0].name, "Olive green");
        assert_eq!(swatches[0].hex, "#6B8E23");
    }

    #[test]
    fn test_extract_caps_at_eight() {
        let text = "camel olive green chocolate brown warm gray ivory mustard \
                    yellow burnt orange rust forest green teal";
        let swatches = extract_colors_from_text(text);
        assert_eq!(swatches.len(), 8);
    }

    #[test]
    fn test_extract_no_matches() {
        assert!(extract_colors_from_text("nothing chromatic here").is_empty());
    }
}
