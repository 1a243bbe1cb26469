use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid URL: {0}")]
    UrlError(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
