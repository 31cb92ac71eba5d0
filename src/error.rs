//! Error handling for the resume checker application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeCheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Document decoding error: {0}")]
    DocumentDecode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeCheckerError>;
