use thiserror::Error;

use varanno_core::models::Interval;

#[derive(Error, Debug)]
pub enum RefSeqError {
    #[error("Malformed reference: {0}")]
    Format(String),

    #[error("Query [{start}, {end}] is outside the reference (length {length})")]
    Range { start: u32, end: u32, length: usize },

    #[error("Edit at {edit} is not contained in the query interval {query}")]
    EditOutOfBounds { edit: Interval, query: Interval },

    #[error("Substitution covers {expected} bases but the replacement has {found}")]
    EditLengthMismatch { expected: usize, found: usize },

    #[error("Window length must be at least 1, got {0}")]
    InvalidWindowLength(usize),

    #[error("Can't read reference file {path}: {message}")]
    Read { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RefSeqError>;
