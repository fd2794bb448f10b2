use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LoaderError>;
