use thiserror::Error;

/// Library-level error type.
/// Rendering itself is fail-soft per section; these surface only at the
/// load boundaries (config file, page shell) and from form validation.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Portfolio configuration is not valid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Page shell error: {0}")]
    Shell(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
