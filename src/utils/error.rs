use thiserror::Error;

#[derive(Error, Debug)]
pub enum SprintError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    ApiStatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("invalid date in {field}: {value:?} (expected YYYY/MM/DD)")]
    DateParseError { field: String, value: String },

    #[error("invalid duration {value:?}: {reason}")]
    DurationParseError { value: String, reason: String },

    #[error("invalid title format {format:?}: {reason}")]
    TemplateError { format: String, reason: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("environment variable {name} is not set")]
    MissingEnvError { name: String },

    #[error("Sync error: {message}")]
    SyncError { message: String },
}

pub type Result<T> = std::result::Result<T, SprintError>;
