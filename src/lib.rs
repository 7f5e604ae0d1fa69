//! PDF Reader MCP Server Library
//!
//! This crate provides MCP tools for reading PDF files:
//! - `pdf-reader`: Extract text content from a PDF
//! - `pdf-metadata`: Report PDF metadata only
//! - `search-pdf`: Line-oriented keyword search over extracted text

pub mod error;
pub mod pdf;
pub mod server;

pub use error::{Error, Result};
pub use server::{run_server, run_server_with_config, PdfServer, ServerConfig};
