//! Positional identifier ("BCVWP") sanitizing and decoding.
//!
//! Identifiers are fixed-width digit strings: `BBCCCVVVWWW` with an optional
//! trailing part digit `P`. Some apparatuses prefix the address with a single
//! disambiguation letter (`o`/`n`), which is dropped before decoding.

use std::ops::Range;

use crate::error::{CorpusError, Result};
use crate::models::Position;

const BOOK: Range<usize> = 0..2;
const CHAPTER: Range<usize> = 2..5;
const VERSE: Range<usize> = 5..8;
const WORD: Range<usize> = 8..11;
const PART: Range<usize> = 11..12;

/// Trim the identifier and drop one leading `o`/`n` (any case) if a digit follows it.
#[must_use]
pub fn sanitize(raw: &str) -> &str {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(prefix), Some(next))
            if matches!(prefix, 'o' | 'n' | 'O' | 'N') && next.is_ascii_digit() =>
        {
            &trimmed[1..]
        }
        _ => trimmed,
    }
}

/// Sanitize and decode a raw identifier into a [`Position`].
pub fn parse(raw: &str) -> Result<Position> {
    let sanitized = sanitize(raw);
    let field = |range: Range<usize>| -> Result<u32> {
        sanitized
            .get(range)
            .and_then(parse_digits)
            .ok_or_else(|| CorpusError::MalformedIdentifier {
                raw: raw.to_string(),
            })
    };

    let book = field(BOOK)?;
    let chapter = field(CHAPTER)?;
    let verse = field(VERSE)?;
    let word = field(WORD)?;
    let part = if sanitized.len() > PART.start {
        Some(field(PART)?)
    } else {
        None
    };

    Ok(Position {
        book,
        chapter,
        verse,
        word,
        part,
    })
}

fn parse_digits(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
