// Pedantic lint configuration for the crate.
// - cast_possible_truncation: row counts and percentages stay far below u32 limits
// - cast_sign_loss: SQLite COUNT(*) is never negative
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are limited to compiled-in regex literals
// - module_name_repetitions: `CorpusConfig`, `CorpusError` read better qualified
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod ingest;
pub mod models;
