use clap::ValueEnum;
use serde::Serialize;

/// Writing direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Language reference row, keyed by `code`.
#[derive(Debug, Clone, Serialize)]
pub struct Language {
    /// Language code (e.g. `grc`, `heb`, `eng`).
    pub code: String,
    pub text_direction: TextDirection,
    /// Preferred font family for display, if any.
    pub font_family: Option<String>,
}

impl Language {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        text_direction: TextDirection,
        font_family: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            text_direction,
            font_family,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_direction_as_str() {
        assert_eq!(TextDirection::Ltr.as_str(), "ltr");
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
    }

    #[test]
    fn text_direction_serializes_lowercase() {
        let json = serde_json::to_string(&TextDirection::Rtl).unwrap();
        assert_eq!(json, "\"rtl\"");
    }
}
