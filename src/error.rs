use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tsv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error("malformed identifier: {raw:?}")]
    MalformedIdentifier { raw: String },

    #[error("missing required column: {column}")]
    MissingRequiredColumn { column: String },

    #[error("corpus already registered: {id}")]
    DuplicateCorpus { id: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
