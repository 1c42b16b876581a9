//! Line-scanning fallback for replies that carry no parseable JSON.
//!
//! Walks the reply one line at a time, keeping a section/subsection
//! cursor. Trigger phrases are tested per line in a fixed precedence
//! order; the first match wins and a line is never classified twice. A
//! line that matches a trigger is treated as a pure header — any content
//! sharing it is discarded — except for the four observation triggers,
//! which capture their own line verbatim without moving the cursor.
//!
//! The precedence order is kept exactly as observed in the wild rather
//! than redesigned; real model replies rarely reach this path now that
//! the prompt demands JSON, so compatibility wins over elegance here.

use crate::analysis::AnalysisSections;

/// Where accumulated content currently lands.
///
/// The cursor is the scanner's only state; it never re-reads earlier
/// lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// No section seen yet; content lines are dropped.
    None,
    Reasoning,
    /// Fashion section with no subsection; content defaults to
    /// `excellent_choices`.
    FashionColors,
    ExcellentChoices,
    HairColors,
    /// General makeup talk: appended to blush, lipstick and eyeshadow
    /// alike.
    Makeup,
    MakeupBlush,
    MakeupLipstick,
    MakeupEyeshadow,
    Disclaimer,
}

const SEASONS: [&str; 4] = ["autumn", "winter", "spring", "summer"];
const SEASON_QUALIFIERS: [&str; 4] = ["warm", "true", "deep", "soft"];

/// Scan `text` line by line into `sections`.
///
/// Blank lines (after trimming) are skipped. Accumulator fields grow by
/// concatenation with `\n` separators; a trailing newline is expected.
pub(crate) fn scan(text: &str, sections: &mut AnalysisSections) {
    let mut cursor = Cursor::None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();

        if lowered.contains("skin tone") || lowered.contains("skin:") {
            sections.observations.skin_tone = strip_emphasis(line);
        } else if lowered.contains("undertone") {
            sections.observations.undertone = strip_emphasis(line);
        } else if lowered.contains("contrast") {
            sections.observations.contrast = strip_emphasis(line);
        } else if SEASONS.iter().any(|s| lowered.contains(s))
            && SEASON_QUALIFIERS.iter().any(|q| lowered.contains(q))
        {
            sections.observations.overall_type = strip_emphasis(line);
        } else if lowered.contains("here's why") || lowered.contains("why:") {
            cursor = Cursor::Reasoning;
        } else if lowered.contains("fashion colors")
            || lowered.contains("recommendations")
            || lowered.contains("best colors")
        {
            cursor = Cursor::FashionColors;
        } else if lowered.contains("excellent choices")
            || lowered.contains("best choices")
            || lowered.contains("primary colors")
        {
            cursor = Cursor::ExcellentChoices;
        } else if lowered.contains("hair color") || lowered.contains("hair:") {
            cursor = Cursor::HairColors;
        } else if lowered.contains("makeup") || lowered.contains("cosmetics") {
            cursor = Cursor::Makeup;
        } else if lowered.contains("blush") {
            cursor = Cursor::MakeupBlush;
        } else if lowered.contains("lipstick") || lowered.contains("lips") {
            cursor = Cursor::MakeupLipstick;
        } else if lowered.contains("eyeshadow") || lowered.contains("eyes") {
            cursor = Cursor::MakeupEyeshadow;
        } else if lowered.contains("disclaimer")
            || lowered.contains("note:")
            || lowered.contains("important:")
        {
            cursor = Cursor::Disclaimer;
        } else {
            append_content(sections, cursor, line);
        }
    }
}

/// Dispatch a content line to the field(s) the cursor targets.
fn append_content(sections: &mut AnalysisSections, cursor: Cursor, line: &str) {
    match cursor {
        Cursor::None => {}
        Cursor::Reasoning => push_line(&mut sections.reasoning, line),
        Cursor::FashionColors | Cursor::ExcellentChoices => {
            push_line(&mut sections.fashion_colors.excellent_choices, line);
        }
        Cursor::HairColors => push_line(&mut sections.fashion_colors.hair_colors, line),
        Cursor::Makeup => {
            push_line(&mut sections.fashion_colors.makeup.blush, line);
            push_line(&mut sections.fashion_colors.makeup.lipstick, line);
            push_line(&mut sections.fashion_colors.makeup.eyeshadow, line);
        }
        Cursor::MakeupBlush => push_line(&mut sections.fashion_colors.makeup.blush, line),
        Cursor::MakeupLipstick => push_line(&mut sections.fashion_colors.makeup.lipstick, line),
        Cursor::MakeupEyeshadow => push_line(&mut sections.fashion_colors.makeup.eyeshadow, line),
        Cursor::Disclaimer => push_line(&mut sections.disclaimer, line),
    }
}

fn push_line(field: &mut String, line: &str) {
    field.push_str(line);
    field.push('\n');
}

/// Markdown emphasis markers are stripped from captured observation lines.
fn strip_emphasis(line: &str) -> String {
    line.replace('*', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanned(text: &str) -> AnalysisSections {
        let mut sections = AnalysisSections::default();
        scan(text, &mut sections);
        sections
    }

    #[test]
    fn test_observation_lines_captured_verbatim() {
        let sections = scanned("**Skin tone:** medium with golden cast\nUndertone: warm\nContrast: low");
        assert_eq!(sections.observations.skin_tone, "Skin tone: medium with golden cast");
        assert_eq!(sections.observations.undertone, "Undertone: warm");
        assert_eq!(sections.observations.contrast, "Contrast: low");
    }

    #[test]
    fn test_overall_type_needs_season_and_qualifier() {
        let sections = scanned("You are a Warm Autumn");
        assert_eq!(sections.observations.overall_type, "You are a Warm Autumn");

        let no_qualifier = scanned("Autumn suits you");
        assert_eq!(no_qualifier.observations.overall_type, "");
    }

    #[test]
    fn test_blush_accumulates_without_leaking() {
        let text = "Blush\nwarm peach shades\nterracotta tones\nLipstick\nbrick red";
        let sections = scanned(text);
        assert_eq!(
            sections.fashion_colors.makeup.blush,
            "warm peach shades\nterracotta tones\n"
        );
        assert_eq!(sections.fashion_colors.makeup.lipstick, "brick red\n");
    }

    #[test]
    fn test_header_line_content_is_discarded() {
        // The header line itself contributes nothing to the accumulator.
        let sections = scanned("Here's why: you glow in earth tones\nbecause of your warm cast");
        assert_eq!(sections.reasoning, "because of your warm cast\n");
    }

    #[test]
    fn test_general_makeup_feeds_all_three_fields() {
        let sections = scanned("Makeup\nkeep it warm toned");
        assert_eq!(sections.fashion_colors.makeup.blush, "keep it warm toned\n");
        assert_eq!(sections.fashion_colors.makeup.lipstick, "keep it warm toned\n");
        assert_eq!(sections.fashion_colors.makeup.eyeshadow, "keep it warm toned\n");
    }

    #[test]
    fn test_fashion_section_defaults_to_excellent_choices() {
        let sections = scanned("Best colors for you\ncamel and rust");
        assert_eq!(sections.fashion_colors.excellent_choices, "camel and rust\n");
    }

    #[test]
    fn test_content_before_any_header_is_dropped() {
        let sections = scanned("hello there\ngeneral chatter");
        assert_eq!(sections, AnalysisSections::default());
    }

    #[test]
    fn test_disclaimer_accumulates() {
        let sections = scanned("Note: lighting caveats\nresults vary with lighting");
        assert_eq!(sections.disclaimer, "results vary with lighting\n");
    }
}
