use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::models::{Corpus, Language, Side, TextDirection};

/// Default header name of the identifier column.
pub const DEFAULT_ID_FIELD: &str = "xml:id";
/// Rows persisted between intermediate commits.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// User settings, optionally loaded from a TOML file via `--config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ingestion behavior.
    pub ingest: IngestSettings,
    /// Header names of the input columns.
    pub columns: ColumnSettings,
}

/// Ingestion-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSettings {
    /// Rows persisted between intermediate commits.
    pub batch_size: usize,
    /// Header name of the identifier column when none is given on the command line.
    pub id_field: String,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            id_field: DEFAULT_ID_FIELD.into(),
        }
    }
}

/// Header names for the text-bearing columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSettings {
    pub text: String,
    /// Fallback for rows with an empty `text` cell.
    pub lemma: String,
    pub after: String,
    pub gloss: String,
    /// Fallback for rows with an empty `gloss` cell.
    pub english: String,
    pub source_verse: String,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self {
            text: "text".into(),
            lemma: "lemma".into(),
            after: "after".into(),
            gloss: "gloss".into(),
            english: "english".into(),
            source_verse: "source_verse".into(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. The file must exist and parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CorpusError::Config(format!("cannot read {}: {e}", path.display())))?;
        let settings: Self = toml::from_str(&content)
            .map_err(|e| CorpusError::Config(format!("invalid {}: {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.ingest.batch_size == 0 {
            return Err(CorpusError::Config("ingest.batch_size must be > 0".into()));
        }
        if self.ingest.id_field.trim().is_empty() {
            return Err(CorpusError::Config("ingest.id_field must not be empty".into()));
        }
        Ok(())
    }
}

/// Everything needed to ingest one corpus file.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub corpus: Corpus,
    /// Path of the tab-separated input file.
    pub path: PathBuf,
    /// Identifier column override; `None` uses `IngestSettings::id_field`.
    pub id_field: Option<String>,
}

impl CorpusConfig {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        full_name: &str,
        side: Side,
        path: PathBuf,
        language_code: &str,
        text_direction: TextDirection,
        font_family: &str,
    ) -> Self {
        let font_family = Some(font_family.to_string()).filter(|f| !f.trim().is_empty());
        let language = Language::new(language_code, text_direction, font_family);
        let corpus = Corpus::new(id, side, name, full_name, &path, language);
        Self {
            corpus,
            path,
            id_field: None,
        }
    }

    #[must_use]
    pub fn with_id_field(mut self, id_field: Option<String>) -> Self {
        self.id_field = id_field;
        self
    }

    /// Identifier column name in effect for this corpus.
    #[must_use]
    pub fn id_field<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.id_field
            .as_deref()
            .unwrap_or(settings.ingest.id_field.as_str())
    }
}
