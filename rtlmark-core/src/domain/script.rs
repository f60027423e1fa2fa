//! Script classification for Arabic/Latin direction detection
//!
//! Only the Arabic blocks are recognized as right-to-left. Hebrew, Syriac and
//! the other RTL scripts fall into [`CodepointClass::Neutral`] and are treated
//! as left-to-right by every decision in this crate.

use serde::{Deserialize, Serialize};

use super::Direction;

/// Arabic code point ranges (inclusive)
pub const RTL_RANGES: &[(u32, u32)] = &[
    (0x0600, 0x06FF), // Arabic
    (0x0750, 0x077F), // Arabic Supplement
    (0x08A0, 0x08FF), // Arabic Extended-A
    (0xFB50, 0xFDFF), // Arabic Presentation Forms-A
    (0xFE70, 0xFEFF), // Arabic Presentation Forms-B
];

/// Latin letter ranges (inclusive)
pub const LATIN_RANGES: &[(u32, u32)] = &[
    (0x0041, 0x005A), // A-Z
    (0x0061, 0x007A), // a-z
    (0x00C0, 0x00FF), // Latin-1 Supplement
    (0x0100, 0x017F), // Latin Extended-A
    (0x0180, 0x024F), // Latin Extended-B
];

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodepointClass {
    /// Arabic-script character
    Rtl,
    /// Latin letter
    Latin,
    /// Whitespace, digits, punctuation and every other script
    Neutral,
}

/// Whole-string script verdict
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedContentVerdict {
    /// Contains Arabic but no Latin letters
    PureRtl,
    /// Contains no Arabic; the fallback for empty and neutral-only text
    #[default]
    PureLtr,
    /// Contains both Arabic and Latin letters
    Mixed,
}

impl MixedContentVerdict {
    /// Check whether the verdict is [`MixedContentVerdict::Mixed`]
    pub fn is_mixed(self) -> bool {
        matches!(self, MixedContentVerdict::Mixed)
    }

    /// Whether the classified text contained Arabic
    pub fn contains_rtl(self) -> bool {
        matches!(self, MixedContentVerdict::PureRtl | MixedContentVerdict::Mixed)
    }

    /// Whole-string direction: RTL whenever any Arabic is present
    pub fn direction(self) -> Direction {
        if self.contains_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Stable lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            MixedContentVerdict::PureRtl => "pure_rtl",
            MixedContentVerdict::PureLtr => "pure_ltr",
            MixedContentVerdict::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for MixedContentVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn in_ranges(ch: char, ranges: &[(u32, u32)]) -> bool {
    let cp = ch as u32;
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Pure script classification logic
pub trait ScriptClassifier: Send + Sync {
    /// Classify a character
    fn classify_char(&self, ch: char) -> CodepointClass;

    /// Check if character is a strong RTL character
    fn is_rtl(&self, ch: char) -> bool {
        matches!(self.classify_char(ch), CodepointClass::Rtl)
    }

    /// Check if character is a Latin letter
    fn is_latin(&self, ch: char) -> bool {
        matches!(self.classify_char(ch), CodepointClass::Latin)
    }

    /// Check whether any character of `text` is RTL
    fn contains_rtl(&self, text: &str) -> bool {
        text.chars().any(|ch| self.is_rtl(ch))
    }

    /// Check whether any character of `text` is a Latin letter
    fn contains_latin(&self, text: &str) -> bool {
        text.chars().any(|ch| self.is_latin(ch))
    }

    /// Classify a whole string
    fn classify(&self, text: &str) -> MixedContentVerdict {
        let mut has_rtl = false;
        let mut has_latin = false;
        for ch in text.chars() {
            match self.classify_char(ch) {
                CodepointClass::Rtl => has_rtl = true,
                CodepointClass::Latin => has_latin = true,
                CodepointClass::Neutral => continue,
            }
            if has_rtl && has_latin {
                return MixedContentVerdict::Mixed;
            }
        }

        if has_rtl {
            MixedContentVerdict::PureRtl
        } else {
            MixedContentVerdict::PureLtr
        }
    }
}

/// Range-table classifier for the Arabic and Latin blocks
#[derive(Clone, Copy, Debug, Default)]
pub struct ArabicLatinClassifier;

impl ScriptClassifier for ArabicLatinClassifier {
    fn classify_char(&self, ch: char) -> CodepointClass {
        if in_ranges(ch, RTL_RANGES) {
            CodepointClass::Rtl
        } else if in_ranges(ch, LATIN_RANGES) {
            CodepointClass::Latin
        } else {
            CodepointClass::Neutral
        }
    }
}

/// Classify a single character
pub fn code_point_class(ch: char) -> CodepointClass {
    ArabicLatinClassifier.classify_char(ch)
}

/// True iff `ch` lies in one of the Arabic blocks
pub fn is_rtl_char(ch: char) -> bool {
    in_ranges(ch, RTL_RANGES)
}

/// True iff `ch` is a Latin letter (Basic Latin letters through Latin Extended-B)
pub fn is_latin_char(ch: char) -> bool {
    in_ranges(ch, LATIN_RANGES)
}

/// True iff any character of `text` is RTL. Empty text is never RTL.
pub fn contains_rtl(text: &str) -> bool {
    ArabicLatinClassifier.contains_rtl(text)
}

/// True iff any character of `text` is a Latin letter
pub fn contains_latin(text: &str) -> bool {
    ArabicLatinClassifier.contains_latin(text)
}

/// Classify a whole string as pure RTL, pure LTR or mixed
pub fn classify(text: &str) -> MixedContentVerdict {
    ArabicLatinClassifier.classify(text)
}

/// True iff `text` contains both Arabic and Latin letters
pub fn is_mixed_content(text: &str) -> bool {
    classify(text).is_mixed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_range_edges() {
        for &(lo, hi) in RTL_RANGES {
            assert!(is_rtl_char(char::from_u32(lo).unwrap()));
            assert!(is_rtl_char(char::from_u32(hi).unwrap()));
        }
        assert!(!is_rtl_char('\u{05FF}'));
        assert!(!is_rtl_char('\u{0700}'));
        assert!(!is_rtl_char('\u{089F}'));
        assert!(!is_rtl_char('\u{FE00}'));
        assert!(!is_rtl_char('\u{FF00}'));
    }

    #[test]
    fn test_hebrew_is_not_rtl() {
        assert!(!is_rtl_char('א'));
        assert_eq!(code_point_class('ש'), CodepointClass::Neutral);
        assert_eq!(classify("שלום"), MixedContentVerdict::PureLtr);
    }

    #[test]
    fn test_latin_ranges() {
        assert!(is_latin_char('A'));
        assert!(is_latin_char('z'));
        assert!(is_latin_char('é'));
        assert!(is_latin_char('Ł'));
        assert!(is_latin_char('\u{024F}'));
        assert!(!is_latin_char('\u{0250}'));
        assert!(!is_latin_char('1'));
        assert!(!is_latin_char('@'));
        assert!(!is_latin_char('['));
    }

    #[test]
    fn test_code_point_class() {
        assert_eq!(code_point_class('م'), CodepointClass::Rtl);
        assert_eq!(code_point_class('a'), CodepointClass::Latin);
        assert_eq!(code_point_class(' '), CodepointClass::Neutral);
        assert_eq!(code_point_class('٣'), CodepointClass::Rtl);
        assert_eq!(code_point_class('3'), CodepointClass::Neutral);
    }

    #[test]
    fn test_empty_text() {
        assert!(!contains_rtl(""));
        assert!(!contains_latin(""));
        assert_eq!(classify(""), MixedContentVerdict::PureLtr);
        assert!(!is_mixed_content(""));
    }

    #[test]
    fn test_classify_scenarios() {
        assert_eq!(classify("مرحبا"), MixedContentVerdict::PureRtl);
        assert_eq!(classify("Hello"), MixedContentVerdict::PureLtr);
        assert_eq!(classify("مرحبا Hello"), MixedContentVerdict::Mixed);
        assert_eq!(classify("123 ... !"), MixedContentVerdict::PureLtr);
        assert_eq!(classify("你好"), MixedContentVerdict::PureLtr);
        assert_eq!(classify("ﻣﺮﺣﺒﺎ 42"), MixedContentVerdict::PureRtl);
    }

    #[test]
    fn test_verdict_direction() {
        assert_eq!(MixedContentVerdict::PureRtl.direction(), Direction::Rtl);
        assert_eq!(MixedContentVerdict::Mixed.direction(), Direction::Rtl);
        assert_eq!(MixedContentVerdict::PureLtr.direction(), Direction::Ltr);
        assert_eq!(MixedContentVerdict::Mixed.to_string(), "mixed");
    }

    #[test]
    fn test_verdict_serde() {
        let json = serde_json::to_string(&MixedContentVerdict::PureRtl).unwrap();
        assert_eq!(json, "\"pure_rtl\"");
        let class = serde_json::to_string(&CodepointClass::Latin).unwrap();
        assert_eq!(class, "\"latin\"");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let text = "العدد π يساوي 3.14 تقريباً, roughly";
        assert_eq!(classify(text), classify(text));
    }
}
