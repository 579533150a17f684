//! Header introspection for corpus files, resolved once per run.

use csv::StringRecord;

use crate::config::ColumnSettings;
use crate::error::{CorpusError, Result};

/// Column positions of a corpus file. Optional columns absent from the header are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub id: usize,
    pub text: usize,
    /// Text fallback; the `text` column itself when there is no lemma column.
    pub lemma: usize,
    pub after: Option<usize>,
    pub gloss: Option<usize>,
    pub english: Option<usize>,
    pub source_verse: Option<usize>,
}

impl ResolvedColumns {
    /// Locate every known column in `header`. Identifier and text columns are required.
    pub fn resolve(header: &StringRecord, id_field: &str, names: &ColumnSettings) -> Result<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| CorpusError::MissingRequiredColumn {
                column: name.to_string(),
            })
        };

        let id = require(id_field)?;
        let text = require(names.text.as_str())?;
        Ok(Self {
            id,
            text,
            lemma: find(names.lemma.as_str()).unwrap_or(text),
            after: find(names.after.as_str()),
            gloss: find(names.gloss.as_str()),
            english: find(names.english.as_str()),
            source_verse: find(names.source_verse.as_str()),
        })
    }

    #[must_use]
    pub fn id<'r>(&self, row: &'r StringRecord) -> &'r str {
        cell(row, self.id)
    }

    /// Row text, falling back to the lemma column when the text cell is empty.
    #[must_use]
    pub fn text<'r>(&self, row: &'r StringRecord) -> &'r str {
        let text = cell(row, self.text);
        if text.is_empty() {
            cell(row, self.lemma)
        } else {
            text
        }
    }

    #[must_use]
    pub fn after<'r>(&self, row: &'r StringRecord) -> Option<&'r str> {
        self.after.map(|i| cell(row, i))
    }

    /// Raw gloss: the `gloss` cell, or the `english` cell when that is empty.
    /// `None` when the file has neither column.
    #[must_use]
    pub fn gloss<'r>(&self, row: &'r StringRecord) -> Option<&'r str> {
        let gloss = self.gloss.map(|i| cell(row, i)).filter(|g| !g.is_empty());
        match (gloss, self.english) {
            (Some(g), _) => Some(g),
            (None, Some(i)) => Some(cell(row, i)),
            (None, None) => self.gloss.map(|_| ""),
        }
    }

    #[must_use]
    pub fn source_verse<'r>(&self, row: &'r StringRecord) -> Option<&'r str> {
        self.source_verse.map(|i| cell(row, i))
    }
}

/// Cell at `index`, or `""` when the row is shorter than the header.
fn cell(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or("")
}
