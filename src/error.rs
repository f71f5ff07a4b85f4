//! Error types for blockmesh

use thiserror::Error;

/// blockmesh error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File load error
    #[error("File load error: {0}")]
    FileLoad(String),

    /// File save error
    #[error("File save error: {0}")]
    FileSave(String),

    /// An input line does not have the expected shape
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the input file
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// More distinct channels than palette entries
    #[error("Color palette exhausted: more than {0} distinct channels")]
    PaletteExhausted(usize),
}

/// Result type alias for blockmesh operations
pub type Result<T> = std::result::Result<T, Error>;
