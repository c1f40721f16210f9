use thiserror::Error;

/// Errors from writing a graph
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown output format '{0}' (expected ntriples or turtle)")]
    UnknownFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FormatResult<T> = Result<T, FormatError>;
