use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use super::language::Language;

/// Which half of a parallel text a corpus belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Original-language text.
    Sources,
    /// Translated text.
    Targets,
}

impl Side {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sources => "sources",
            Self::Targets => "targets",
        }
    }
}

/// Corpus reference row together with its language descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Corpus {
    pub id: String,
    pub side: Side,
    /// Short display name.
    pub name: String,
    pub full_name: String,
    /// Base name of the file the corpus was loaded from.
    pub file_name: String,
    pub language: Language,
}

impl Corpus {
    /// Build a corpus descriptor, deriving `file_name` from the input path.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        side: Side,
        name: impl Into<String>,
        full_name: impl Into<String>,
        path: &Path,
        language: Language,
    ) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            id: id.into(),
            side,
            name: name.into(),
            full_name: full_name.into(),
            file_name,
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextDirection;

    #[test]
    fn corpus_new_uses_base_file_name() {
        let lang = Language::new("grc", TextDirection::Ltr, None);
        let corpus = Corpus::new(
            "GNT",
            Side::Sources,
            "GNT",
            "Greek New Testament",
            Path::new("/data/corpora/gnt-sources.tsv"),
            lang,
        );
        assert_eq!(corpus.file_name, "gnt-sources.tsv");
        assert_eq!(corpus.side.as_str(), "sources");
    }
}
