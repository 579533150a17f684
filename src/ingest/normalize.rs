use once_cell::sync::Lazy;
use regex::Regex;

/// Glosses built entirely from dot-joined non-empty segments (`run.quickly.away`).
static DOTTED_GLOSS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:.+\..+)+$").expect("valid gloss pattern"));

/// Replace the dots of a dot-joined gloss with spaces; anything else passes through.
#[must_use]
pub fn cleanup_gloss(gloss: Option<&str>) -> Option<String> {
    let gloss = gloss?;
    if DOTTED_GLOSS.is_match(gloss) {
        Some(gloss.replace('.', " "))
    } else {
        Some(gloss.to_string())
    }
}

/// Lowercase form used for `normalized_text`. No other folding is applied.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_gloss_is_spaced() {
        assert_eq!(
            cleanup_gloss(Some("run.quickly.away")).as_deref(),
            Some("run quickly away")
        );
        assert_eq!(
            cleanup_gloss(Some("don't.stop")).as_deref(),
            Some("don't stop")
        );
    }

    #[test]
    fn plain_gloss_is_unchanged() {
        assert_eq!(
            cleanup_gloss(Some("plain gloss")).as_deref(),
            Some("plain gloss")
        );
    }

    #[test]
    fn dangling_dots_are_unchanged() {
        assert_eq!(cleanup_gloss(Some("etc.")).as_deref(), Some("etc."));
        assert_eq!(cleanup_gloss(Some(".net")).as_deref(), Some(".net"));
        assert_eq!(cleanup_gloss(Some(".")).as_deref(), Some("."));
    }

    #[test]
    fn absent_gloss_stays_absent() {
        assert_eq!(cleanup_gloss(None), None);
    }

    #[test]
    fn cleanup_is_idempotent() {
        for gloss in [
            "run.quickly.away",
            "don't.stop",
            "plain gloss",
            "etc.",
            "",
            "a.b c.d",
            "multi\nline.gloss",
        ] {
            let once = cleanup_gloss(Some(gloss));
            let twice = cleanup_gloss(once.as_deref());
            assert_eq!(once, twice, "gloss {gloss:?}");
        }
    }

    #[test]
    fn normalize_text_lowercases_only() {
        assert_eq!(normalize_text("Λόγος"), "λόγος");
        assert_eq!(normalize_text("In"), "in");
        assert_eq!(normalize_text("אֱלֹהִים"), "אֱלֹהִים");
    }
}
