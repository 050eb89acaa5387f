use thiserror::Error;

#[derive(Error, Debug)]
pub enum SatangError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed import file: {0}")]
    MalformedFile(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Unknown transaction: {0}")]
    UnknownTransaction(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SatangError>;
