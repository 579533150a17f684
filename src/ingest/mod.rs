pub mod columns;
pub mod filter;
pub mod identifier;
pub mod normalize;
pub mod pipeline;

pub use columns::ResolvedColumns;
pub use pipeline::{ingest_corpus, ConsoleProgress, IngestReport, NoProgress, ProgressSink};
