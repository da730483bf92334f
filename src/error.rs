use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
