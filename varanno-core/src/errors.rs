use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Missing field `{field}` in line: {line}")]
    MissingField { field: &'static str, line: String },

    #[error("Field `{field}` is not a valid integer: {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Invalid closed interval [{start}, {end}]: start must be >= 1 and <= end")]
    InvalidInterval { start: u32, end: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
