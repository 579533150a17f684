use std::path::PathBuf;

use clap::Parser;

use crate::config::CorpusConfig;
use crate::error::{CorpusError, Result};
use crate::models::{Side, TextDirection};

#[derive(Parser, Debug)]
#[command(
    name = "corpus-db",
    version,
    about = "Create alignment databases and load tabular corpora into them",
    after_help = "At least one of --sql-file, --builtin-schema or --corpus-file is required. \
                  Loading a corpus needs the full set of --corpus-* metadata flags; \
                  --corpus-id-field is the only optional one."
)]
pub struct Cli {
    /// Target SQLite database (created if missing)
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Schema scripts to run before loading, in order
    #[arg(short = 's', long = "sql-file", num_args = 1..)]
    pub sql_files: Vec<PathBuf>,

    /// Apply the built-in language/corpora/words_or_parts schema
    #[arg(long)]
    pub builtin_schema: bool,

    /// Settings file (TOML)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Suppress progress lines
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Tab-separated corpus file to load
    #[arg(long)]
    pub corpus_file: Option<PathBuf>,

    /// Corpus id (e.g. "sbl-gnt")
    #[arg(long)]
    pub corpus_id: Option<String>,

    /// Short display name
    #[arg(long)]
    pub corpus_name: Option<String>,

    /// Full display name
    #[arg(long)]
    pub corpus_full_name: Option<String>,

    /// Side of the parallel text
    #[arg(long, value_enum)]
    pub corpus_side: Option<Side>,

    /// Language code
    #[arg(long)]
    pub corpus_language: Option<String>,

    /// Text direction of the language
    #[arg(long, value_enum)]
    pub corpus_text_direction: Option<TextDirection>,

    /// Font family of the language
    #[arg(long)]
    pub corpus_font_family: Option<String>,

    /// Header name of the identifier column (default from settings: "xml:id")
    #[arg(long)]
    pub corpus_id_field: Option<String>,
}

/// A validated request: what to run against which store.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub output: PathBuf,
    pub sql_files: Vec<PathBuf>,
    pub builtin_schema: bool,
    pub settings_path: Option<PathBuf>,
    pub quiet: bool,
    pub corpus: Option<CorpusConfig>,
}

impl Cli {
    /// Check the flag combination before anything touches the store.
    pub fn into_invocation(self) -> Result<Invocation> {
        let has_schema = !self.sql_files.is_empty() || self.builtin_schema;
        if !has_schema && self.corpus_file.is_none() {
            return Err(CorpusError::InvalidInvocation(
                "nothing to do: pass --sql-file, --builtin-schema or --corpus-file".into(),
            ));
        }

        let corpus = match self.corpus_file {
            None => None,
            Some(path) => {
                let missing: Vec<&str> = [
                    ("--corpus-id", self.corpus_id.is_none()),
                    ("--corpus-name", self.corpus_name.is_none()),
                    ("--corpus-full-name", self.corpus_full_name.is_none()),
                    ("--corpus-side", self.corpus_side.is_none()),
                    ("--corpus-language", self.corpus_language.is_none()),
                    ("--corpus-text-direction", self.corpus_text_direction.is_none()),
                    ("--corpus-font-family", self.corpus_font_family.is_none()),
                ]
                .into_iter()
                .filter_map(|(flag, absent)| absent.then_some(flag))
                .collect();

                match (
                    self.corpus_id,
                    self.corpus_name,
                    self.corpus_full_name,
                    self.corpus_side,
                    self.corpus_language,
                    self.corpus_text_direction,
                    self.corpus_font_family,
                ) {
                    (
                        Some(id),
                        Some(name),
                        Some(full_name),
                        Some(side),
                        Some(language),
                        Some(direction),
                        Some(font),
                    ) => Some(
                        CorpusConfig::new(
                            &id, &name, &full_name, side, path, &language, direction, &font,
                        )
                        .with_id_field(self.corpus_id_field),
                    ),
                    _ => {
                        return Err(CorpusError::InvalidInvocation(format!(
                            "missing corpus arguments: {}",
                            missing.join(", ")
                        )))
                    }
                }
            }
        };

        Ok(Invocation {
            output: self.output,
            sql_files: self.sql_files,
            builtin_schema: self.builtin_schema,
            settings_path: self.config,
            quiet: self.quiet,
            corpus,
        })
    }
}
