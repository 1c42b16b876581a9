//! Static color lexicon.
//!
//! A fixed, read-only mapping between canonical hex codes and display
//! names, built once at first use and shared by reference across
//! concurrent requests. Two lookup directions:
//!
//! - hex → display name, for labeling rendered swatches
//! - color-phrase-in-text → hex, for pulling colors out of prose
//!
//! Hex keys are canonical uppercase `#RRGGBB`; phrase matching is
//! lowercase substring containment. Callers get exactly that much
//! normalization and no more.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Display names for the hex codes the analysis prompt steers models toward.
static NAME_BY_HEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("#B297A8", "Dusty Rose"),
        ("#93A1B0", "Soft Blue"),
        ("#6E7F8C", "Muted Gray"),
        ("#A5C2C3", "Soft Teal"),
        ("#A28D9E", "Muted Mauve"),
        ("#C19A6B", "Camel"),
        ("#6B8E23", "Olive Green"),
        ("#7B3F00", "Chocolate Brown"),
        ("#8B7355", "Warm Gray"),
        ("#FFFFF0", "Ivory"),
        ("#FFD700", "Mustard Yellow"),
        ("#CC5500", "Burnt Orange"),
        ("#B7410E", "Rust"),
        ("#006400", "Deep Emerald"),
        ("#4169E1", "Royal Blue"),
        ("#800080", "Rich Purple"),
        ("#FF0000", "True Red"),
        ("#FF69B4", "Hot Pink"),
        ("#FFFFFF", "Pure White"),
        ("#36454F", "Charcoal Gray"),
        ("#000080", "Navy Blue"),
        ("#000000", "Black"),
        ("#C0C0C0", "Silver"),
        ("#228B22", "Forest Green"),
        ("#008080", "Teal"),
        ("#FF6347", "Tomato Red"),
        ("#FF7F50", "Coral"),
        ("#FFFF00", "Bright Yellow"),
        ("#4CBB17", "Kelly Green"),
        ("#0000FF", "Bright Blue"),
        ("#FFFDD0", "Cream"),
        ("#FFCBA4", "Peach"),
        ("#87CEEB", "Icy Blue"),
        ("#E6E6FA", "Lavender"),
        ("#9DC183", "Sage Green"),
    ])
});

/// Color phrases recognized in free text.
///
/// Declaration order is significant: extraction reports matches in this
/// order, not the order they appear in the scanned text.
pub(crate) const TEXT_COLOR_VOCABULARY: &[(&str, &str)] = &[
    ("camel", "#C19A6B"),
    ("olive green", "#6B8E23"),
    ("chocolate brown", "#7B3F00"),
    ("warm gray", "#8B7355"),
    ("ivory", "#FFFFF0"),
    ("mustard yellow", "#FFD700"),
    ("burnt orange", "#CC5500"),
    ("rust", "#B7410E"),
    ("forest green", "#228B22"),
    ("teal", "#008080"),
    ("tomato red", "#FF6347"),
    ("deep emerald green", "#006400"),
    ("royal blue", "#4169E1"),
    ("rich purple", "#800080"),
    ("true red", "#FF0000"),
    ("hot pink", "#FF69B4"),
    ("pure white", "#FFFFFF"),
    ("charcoal gray", "#36454F"),
    ("navy blue", "#000080"),
    ("black", "#000000"),
    ("silver", "#C0C0C0"),
    ("icy blue", "#87CEEB"),
    ("coral", "#FF7F50"),
    ("bright yellow", "#FFFF00"),
    ("kelly green", "#4CBB17"),
    ("bright blue", "#0000FF"),
    ("cream", "#FFFDD0"),
    ("gold", "#FFD700"),
    ("peach", "#FFCBA4"),
    ("lavender", "#E6E6FA"),
    ("sage green", "#9DC183"),
    ("dusty rose", "#DC143C"),
    ("mauve", "#E0B0FF"),
    ("soft teal", "#20B2AA"),
];

/// Resolve the display name for a hex code.
///
/// Lookup is case-insensitive against the canonical uppercase keys.
/// Unknown codes get the deterministic fallback `"Color <hex>"` so every
/// swatch can be labeled.
pub fn color_name(hex: &str) -> String {
    NAME_BY_HEX
        .get(hex.to_uppercase().as_str())
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| format!("Color {}", hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_name_known() {
        assert_eq!(color_name("#C19A6B"), "Camel");
    }

    #[test]
    fn test_color_name_case_insensitive() {
        assert_eq!(color_name("#c19a6b"), "Camel");
    }

    #[test]
    fn test_color_name_fallback() {
        assert_eq!(color_name("#123456"), "Color #123456");
    }
}
