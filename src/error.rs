use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}

/// Raised by an address tokenizer when it cannot make sense of its input.
/// Always scoped to a single row; the pipeline never propagates it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    #[error("Unparseable address text: {reason}")]
    Unparseable { reason: String },
}

pub type Result<T> = std::result::Result<T, CleanerError>;
