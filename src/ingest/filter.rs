use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Side;

static PUNCTUATION_OR_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{P}\s]*$").expect("valid punctuation pattern"));

/// Whether a row with this resolved text should be dropped before persisting.
///
/// Only target-side rows are ever dropped: empty text, or text made up of
/// nothing but Unicode punctuation and whitespace.
#[must_use]
pub fn should_skip(side: Side, text: &str) -> bool {
    match side {
        Side::Sources => false,
        Side::Targets => PUNCTUATION_OR_WHITESPACE.is_match(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_drop_punctuation_only() {
        assert!(should_skip(Side::Targets, "..."));
        assert!(should_skip(Side::Targets, ", "));
        assert!(should_skip(Side::Targets, "«»"));
        assert!(should_skip(Side::Targets, "·"));
    }

    #[test]
    fn targets_drop_blank() {
        assert!(should_skip(Side::Targets, ""));
        assert!(should_skip(Side::Targets, " \t"));
    }

    #[test]
    fn targets_keep_words() {
        assert!(!should_skip(Side::Targets, "word"));
        assert!(!should_skip(Side::Targets, "don't"));
        assert!(!should_skip(Side::Targets, "1"));
    }

    #[test]
    fn sources_never_dropped() {
        for text in ["", "...", " ", "λόγος"] {
            assert!(!should_skip(Side::Sources, text));
        }
    }
}
