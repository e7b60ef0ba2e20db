use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures talking to the directory and validation services.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to send request: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status: {0}")]
    HttpStatus(StatusCode),

    #[error("Malformed response payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start background runtime: {0}")]
    Runtime(std::io::Error),

    #[error("Background task ended without a result")]
    WorkerGone,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
