use clap::Parser;
use tracing_subscriber::EnvFilter;

use corpus_db::cli::commands::{Cli, Invocation};
use corpus_db::cli::output;
use corpus_db::config::Settings;
use corpus_db::db::{script, Database};
use corpus_db::error::Result;
use corpus_db::ingest::{self, ConsoleProgress, NoProgress, ProgressSink};

fn main() {
    // stdout carries progress lines and the run report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.into_invocation().and_then(run) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(inv: Invocation) -> Result<()> {
    let settings = match &inv.settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let db = Database::open(&inv.output)?;

    if inv.builtin_schema {
        db.apply_builtin_schema()?;
    }
    for sql_file in &inv.sql_files {
        script::run_script_file(&db, sql_file)?;
    }

    if let Some(corpus) = &inv.corpus {
        let mut console = ConsoleProgress;
        let mut silent = NoProgress;
        let progress: &mut dyn ProgressSink = if inv.quiet {
            &mut silent
        } else {
            &mut console
        };
        let report = ingest::ingest_corpus(&db, corpus, &settings, progress)?;
        println!("{}", output::format_json(&report));
    }
    Ok(())
}
