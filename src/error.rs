//! Error types for PDF Reader MCP Server

use thiserror::Error;

/// Result type alias for PDF Reader MCP Server
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PDF Reader MCP Server
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// File does not have a .pdf extension
    #[error("File must have a .pdf extension: {path}")]
    InvalidExtension { path: String },

    /// File exceeds the maximum allowed size
    #[error("File too large: {size} bytes (max: {max_size} bytes)")]
    FileTooLarge { size: u64, max_size: u64 },

    /// Decoder error (wraps any failure reported by the external PDF decoder)
    #[error("Failed to decode PDF: {reason}")]
    DecodeFailure { reason: String },

    /// Search query could not be compiled into a pattern
    #[error("Invalid search query: {reason}")]
    InvalidQuery { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Return a sanitized error message safe to send to clients.
    /// Filesystem paths and decoder internals are omitted.
    /// Full details should be logged via tracing before calling this.
    pub fn client_message(&self) -> String {
        match self {
            Error::PdfNotFound { .. } => "PDF not found".to_string(),
            Error::InvalidExtension { .. } => "File must have a .pdf extension".to_string(),
            Error::FileTooLarge { size, max_size } => {
                format!("File too large: {} bytes (max: {} bytes)", size, max_size)
            }
            Error::DecodeFailure { .. } => "Failed to decode PDF".to_string(),
            Error::InvalidQuery { .. } => "Invalid search query".to_string(),
            Error::Io(_) => "I/O error".to_string(),
        }
    }
}
