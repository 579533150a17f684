use rusqlite::{ffi, params, OptionalExtension};

use crate::error::{CorpusError, Result};
use crate::models::{Corpus, Language, Token};

use super::Database;

/// Row counts of the three corpus tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub languages: u64,
    pub corpora: u64,
    pub tokens: u64,
}

impl Database {
    // ─── Reference data ───

    /// Insert a language unless one with the same code exists. Returns `true` if inserted.
    ///
    /// A single statement, so there is no window between the lookup and the insert.
    pub fn register_language(&self, language: &Language) -> Result<bool> {
        let inserted = self.conn().execute(
            "INSERT INTO language (code, text_direction, font_family)
             SELECT ?1, ?2, ?3
             WHERE NOT EXISTS (SELECT 1 FROM language WHERE code = ?1)",
            params![
                language.code,
                language.text_direction.as_str(),
                non_blank(language.font_family.as_deref()),
            ],
        )?;
        Ok(inserted > 0)
    }

    /// Insert a corpus row. An already registered id is rejected with `DuplicateCorpus`.
    pub fn register_corpus(&self, corpus: &Corpus) -> Result<()> {
        if self.corpus_exists(&corpus.id)? {
            return Err(CorpusError::DuplicateCorpus {
                id: corpus.id.clone(),
            });
        }
        self.conn()
            .execute(
                "INSERT INTO corpora (id, side, name, full_name, file_name, language_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    corpus.id,
                    corpus.side.as_str(),
                    non_blank(Some(corpus.name.as_str())),
                    non_blank(Some(corpus.full_name.as_str())),
                    non_blank(Some(corpus.file_name.as_str())),
                    corpus.language.code,
                ],
            )
            .map_err(|e| {
                if is_key_conflict(&e) {
                    CorpusError::DuplicateCorpus {
                        id: corpus.id.clone(),
                    }
                } else {
                    e.into()
                }
            })?;
        Ok(())
    }

    /// Check whether a corpus id is already registered.
    pub fn corpus_exists(&self, id: &str) -> Result<bool> {
        let found = self
            .conn()
            .query_row("SELECT 1 FROM corpora WHERE id = ?1", params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    // ─── Tokens ───

    /// Insert one word or part.
    pub fn insert_token(&self, token: &Token) -> Result<()> {
        let mut stmt = self.conn().prepare_cached(
            "INSERT INTO words_or_parts (id, corpus_id, side, text, after, gloss,
                 position_book, position_chapter, position_verse, position_word, position_part,
                 normalized_text, source_verse_bcvid, language_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        )?;
        stmt.execute(params![
            token.id,
            token.corpus_id,
            token.side.as_str(),
            token.text,
            non_blank(token.after.as_deref()),
            non_blank(token.gloss.as_deref()),
            token.position.book,
            token.position.chapter,
            token.position.verse,
            token.position.word,
            token.position.part,
            token.normalized_text,
            non_blank(token.source_verse_bcvid.as_deref()),
            token.language_code,
        ])?;
        Ok(())
    }

    /// Number of tokens stored for a corpus.
    pub fn token_count(&self, corpus_id: &str) -> Result<u64> {
        let count: i64 = self.conn().query_row(
            "SELECT COUNT(*) FROM words_or_parts WHERE corpus_id = ?1",
            params![corpus_id],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Row counts across all corpus tables.
    pub fn table_counts(&self) -> Result<TableCounts> {
        let count = |table: &str| -> Result<u64> {
            let n: i64 = self
                .conn()
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
            Ok(n as u64)
        };
        Ok(TableCounts {
            languages: count("language")?,
            corpora: count("corpora")?,
            tokens: count("words_or_parts")?,
        })
    }
}

/// Empty or whitespace-only values are stored as NULL.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_key_conflict(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => matches!(
            e.extended_code,
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
        ),
        _ => false,
    }
}
