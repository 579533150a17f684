//! Streaming load of one corpus file into the store.
//!
//! Reference data is registered first, then rows are read in file order,
//! filtered, decoded and inserted. Inserts are grouped into batches that are
//! committed every `batch_size` persisted rows, with a final commit once the
//! file is exhausted. Any failure rolls back the open batch and aborts the run.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ByteRecord, Reader, ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::{CorpusConfig, Settings};
use crate::db::Database;
use crate::error::Result;
use crate::ingest::columns::ResolvedColumns;
use crate::ingest::{filter, identifier, normalize};
use crate::models::{Corpus, Token};

/// Receives coarse progress while a corpus is loading.
pub trait ProgressSink {
    /// Called each time the whole-number percentage of rows read changes.
    fn progress(&mut self, corpus_id: &str, percent: u32);
}

/// Prints `"{corpus_id}: {percent}%"` lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn progress(&mut self, corpus_id: &str, percent: u32) {
        println!("{corpus_id}: {percent}%");
    }
}

/// Discards progress.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&mut self, _corpus_id: &str, _percent: u32) {}
}

/// Summary of a completed ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub corpus_id: String,
    /// Data rows read from the file.
    pub rows_read: usize,
    pub rows_persisted: usize,
    /// Target-side rows dropped by the row filter.
    pub rows_skipped: usize,
    /// Commits issued, including the final one.
    pub commits: usize,
}

/// Load one corpus file into `db`.
pub fn ingest_corpus(
    db: &Database,
    config: &CorpusConfig,
    settings: &Settings,
    progress: &mut dyn ProgressSink,
) -> Result<IngestReport> {
    let corpus = &config.corpus;
    info!(corpus = %corpus.id, file = %config.path.display(), side = corpus.side.as_str(), "ingesting corpus");

    let mut reader = open_reader(&config.path)?;
    let header = reader.headers()?.clone();
    let columns =
        ResolvedColumns::resolve(&header, config.id_field(settings), &settings.columns)?;

    if db.register_language(&corpus.language)? {
        info!(language = %corpus.language.code, "registered language");
    }
    db.register_corpus(corpus)?;

    let total_rows = count_rows(&config.path)?;
    let mut run = Run {
        db,
        corpus,
        columns: &columns,
        batch_size: settings.ingest.batch_size.max(1),
        total_rows,
        last_percent: None,
        report: IngestReport {
            corpus_id: corpus.id.clone(),
            ..IngestReport::default()
        },
    };

    db.begin()?;
    let result = (|| -> Result<()> {
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            run.process(&record)?;
            run.emit_progress(progress);
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            db.commit()?;
            run.report.commits += 1;
        }
        Err(e) => {
            error!(
                corpus = %corpus.id,
                row = run.report.rows_read,
                error = %e,
                "ingestion aborted"
            );
            let _ = db.rollback();
            return Err(e);
        }
    }

    info!(
        corpus = %corpus.id,
        persisted = run.report.rows_persisted,
        skipped = run.report.rows_skipped,
        commits = run.report.commits,
        "ingestion completed"
    );
    Ok(run.report)
}

/// Per-run state threaded through the row loop.
struct Run<'a> {
    db: &'a Database,
    corpus: &'a Corpus,
    columns: &'a ResolvedColumns,
    batch_size: usize,
    total_rows: usize,
    last_percent: Option<u32>,
    report: IngestReport,
}

impl Run<'_> {
    fn process(&mut self, record: &StringRecord) -> Result<()> {
        self.report.rows_read += 1;

        let text = self.columns.text(record);
        if filter::should_skip(self.corpus.side, text) {
            self.report.rows_skipped += 1;
            return Ok(());
        }

        let token = build_token(self.corpus, self.columns, record, text)?;
        self.db.insert_token(&token)?;
        self.report.rows_persisted += 1;

        if self.report.rows_persisted % self.batch_size == 0 {
            self.db.commit()?;
            self.report.commits += 1;
            debug!(corpus = %self.corpus.id, rows = self.report.rows_persisted, "batch committed");
            self.db.begin()?;
        }
        Ok(())
    }

    fn emit_progress(&mut self, sink: &mut dyn ProgressSink) {
        if self.total_rows == 0 {
            return;
        }
        let percent = (self.report.rows_read * 100 / self.total_rows) as u32;
        if self.last_percent != Some(percent) {
            self.last_percent = Some(percent);
            sink.progress(&self.corpus.id, percent);
        }
    }
}

/// Turn a surviving row into a token. Fails on a malformed identifier.
fn build_token(
    corpus: &Corpus,
    columns: &ResolvedColumns,
    record: &StringRecord,
    text: &str,
) -> Result<Token> {
    let raw_id = columns.id(record);
    let position = identifier::parse(raw_id)?;

    Ok(Token {
        id: Token::make_id(corpus.side, identifier::sanitize(raw_id)),
        corpus_id: corpus.id.clone(),
        side: corpus.side,
        text: text.to_string(),
        after: columns.after(record).map(str::to_string),
        gloss: normalize::cleanup_gloss(columns.gloss(record)),
        position,
        normalized_text: normalize::normalize_text(text),
        source_verse_bcvid: columns
            .source_verse(record)
            .map(|v| identifier::sanitize(v).to_string()),
        language_code: corpus.language.code.clone(),
    })
}

fn open_reader(path: &Path) -> Result<Reader<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file)))
}

/// Number of data rows (header excluded), used as the progress denominator.
fn count_rows(path: &Path) -> Result<usize> {
    let mut reader = open_reader(path)?;
    let mut record = ByteRecord::new();
    let mut rows = 0;
    while reader.read_byte_record(&mut record)? {
        rows += 1;
    }
    Ok(rows)
}
