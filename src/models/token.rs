use serde::Serialize;

use super::corpus::Side;

/// Location of a token: book/chapter/verse/word and an optional sub-word part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
    pub word: u32,
    pub part: Option<u32>,
}

/// A word or sub-word part ready to be written to `words_or_parts`.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// `"{side}:{sanitized identifier}"`, unique within a corpus.
    pub id: String,
    pub corpus_id: String,
    pub side: Side,
    /// Surface form.
    pub text: String,
    /// Trailing whitespace/punctuation attached to the token.
    pub after: Option<String>,
    pub gloss: Option<String>,
    pub position: Position,
    /// Lowercased `text`.
    pub normalized_text: String,
    /// Sanitized identifier of the aligned verse on the other side.
    pub source_verse_bcvid: Option<String>,
    pub language_code: String,
}

impl Token {
    /// Compose the storage key for a token from its side and sanitized identifier.
    #[must_use]
    pub fn make_id(side: Side, sanitized: &str) -> String {
        format!("{}:{sanitized}", side.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_id_prefixes_side() {
        assert_eq!(
            Token::make_id(Side::Sources, "41004003002"),
            "sources:41004003002"
        );
        assert_eq!(
            Token::make_id(Side::Targets, "410040030021"),
            "targets:410040030021"
        );
    }
}
