//! MCP Server implementation using rmcp

use crate::error::{Error, Result as PdfResult};
use crate::pdf::{
    clean_text, document_fields, info_fields, load_document, search_lines, validate_pdf_path,
    Document, LineMatch, SearchOptions, MAX_PDF_BYTES,
};
use rmcp::{
    handler::server::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    schemars::JsonSchema, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resource limits for the PDF Reader MCP Server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Maximum accepted PDF file size in bytes (default: 10 MiB)
    pub max_file_bytes: u64,
    /// Maximum number of search matches listed verbatim in a report (default: 20)
    pub max_listed_matches: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_PDF_BYTES,
            max_listed_matches: 20,
        }
    }
}

/// PDF Reader MCP Server
#[derive(Clone)]
pub struct PdfServer {
    tool_router: ToolRouter<Self>,
    config: Arc<ServerConfig>,
}

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PdfReaderParams {
    /// Path to the PDF file to extract text from
    pub file: String,
    /// Page range (e.g., "1-5", "1,3,5", "all"). Accepted for compatibility;
    /// the full document is always read.
    #[serde(default)]
    pub pages: Option<String>,
    /// Include PDF metadata in output. Default: true
    #[serde(default = "default_true")]
    pub include_metadata: bool,
    /// Clean and normalize extracted text. Default: false
    #[serde(default)]
    pub clean_text: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PdfMetadataParams {
    /// Path to the PDF file to get metadata from
    pub file: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchPdfParams {
    /// Path to the PDF file to search in
    pub file: String,
    /// Text to search for
    pub query: String,
    /// Case sensitive search. Default: false
    #[serde(default)]
    pub case_sensitive: bool,
    /// Match whole words only. Default: false
    #[serde(default)]
    pub whole_word: bool,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl PdfServer {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new PdfServer with full configuration
    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config: Arc::new(config),
        }
    }

    /// Read text content from a PDF file
    #[tool(
        name = "pdf-reader",
        description = "Read text content from a PDF file. Optionally cleans whitespace and includes document metadata in the report."
    )]
    async fn pdf_reader(&self, Parameters(params): Parameters<PdfReaderParams>) -> String {
        self.process_read(&params).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "pdf-reader failed");
            format!("Error reading PDF file: {}", e.client_message())
        })
    }

    /// Report PDF metadata only
    #[tool(
        name = "pdf-metadata",
        description = "Get PDF metadata only: page count, author, title, dates, keywords, encryption flag, and format version."
    )]
    async fn pdf_metadata(&self, Parameters(params): Parameters<PdfMetadataParams>) -> String {
        self.process_metadata(&params).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "pdf-metadata failed");
            format!("Error reading PDF metadata: {}", e.client_message())
        })
    }

    /// Search for text within a PDF file
    #[tool(
        name = "search-pdf",
        description = "Search for text in a PDF file, line by line. Reports matching lines with per-line match counts."
    )]
    async fn search_pdf(&self, Parameters(params): Parameters<SearchPdfParams>) -> String {
        self.process_search(&params).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "search-pdf failed");
            format!("Error searching PDF file: {}", e.client_message())
        })
    }

    // ========================================================================
    // Processing
    // ========================================================================

    pub async fn process_read(&self, params: &PdfReaderParams) -> PdfResult<String> {
        let path = PathBuf::from(&params.file);
        validate_pdf_path(&path)?;

        if params.pages.is_some() {
            tracing::debug!("page selection is not supported; reading the full document");
        }

        let file_size = std::fs::metadata(&path)?.len();
        let doc = self.load(path.clone()).await?;

        let text = if params.clean_text {
            clean_text(&doc.text)
        } else {
            doc.text.clone()
        };

        Ok(read_report(
            &file_name(&path),
            file_size,
            &doc,
            &text,
            params.include_metadata,
        ))
    }

    pub async fn process_metadata(&self, params: &PdfMetadataParams) -> PdfResult<String> {
        let path = PathBuf::from(&params.file);
        validate_pdf_path(&path)?;

        let file_size = std::fs::metadata(&path)?.len();
        let doc = self.load(path.clone()).await?;

        Ok(metadata_report(&file_name(&path), file_size, &doc))
    }

    pub async fn process_search(&self, params: &SearchPdfParams) -> PdfResult<String> {
        let path = PathBuf::from(&params.file);
        validate_pdf_path(&path)?;

        let doc = self.load(path.clone()).await?;

        let options = SearchOptions {
            case_sensitive: params.case_sensitive,
            whole_word: params.whole_word,
        };
        let matches = search_lines(&doc.text, &params.query, &options)?;

        Ok(search_report(
            &file_name(&path),
            &params.query,
            &matches,
            self.config.max_listed_matches,
        ))
    }

    /// Load the document fresh for this request on the blocking pool.
    /// There is no cross-request caching; every tool invocation decodes anew.
    async fn load(&self, path: PathBuf) -> PdfResult<Document> {
        let max_bytes = self.config.max_file_bytes;
        tokio::task::spawn_blocking(move || load_document(&path, max_bytes))
            .await
            .map_err(|e| Error::DecodeFailure {
                reason: format!("decode task failed: {}", e),
            })?
    }
}

// ============================================================================
// Report formatting
// ============================================================================

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_file_size(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn read_report(
    name: &str,
    file_size: u64,
    doc: &Document,
    text: &str,
    include_metadata: bool,
) -> String {
    let mut report = format!("Successfully extracted text from PDF: {}\n", name);
    report.push_str(&format!("File size: {}\n", format_file_size(file_size)));
    report.push_str(&format!("Number of pages: {}\n", doc.page_count));

    if include_metadata {
        report.push_str("\nMetadata:\n");
        for (label, value) in info_fields(&doc.info) {
            report.push_str(&format!("- {}: {}\n", label, value));
        }
    }

    report.push_str(&format!("\nExtracted Text:\n{}", text));
    report
}

fn metadata_report(name: &str, file_size: u64, doc: &Document) -> String {
    let mut report = format!("PDF Metadata for: {}\n\n", name);
    report.push_str(&format!("Filename: {}\n", name));
    report.push_str(&format!("File Size: {}\n", format_file_size(file_size)));
    for (label, value) in document_fields(doc) {
        report.push_str(&format!("{}: {}\n", label, value));
    }
    report
}

fn search_report(name: &str, query: &str, matches: &[LineMatch], limit: usize) -> String {
    let total: usize = matches.iter().map(|m| m.match_count).sum();

    let mut report = format!("Search results for \"{}\" in {}:\n", query, name);
    report.push_str(&format!(
        "Found {} matching lines with {} total matches\n\n",
        matches.len(),
        total
    ));

    if matches.is_empty() {
        report.push_str("No matches found.");
        return report;
    }

    for m in matches.iter().take(limit) {
        report.push_str(&format!(
            "Line {} ({} matches): {}\n",
            m.line_number, m.match_count, m.content
        ));
    }

    if matches.len() > limit {
        report.push_str(&format!("\n... and {} more results", matches.len() - limit));
    }

    report
}

// ============================================================================
// Server plumbing
// ============================================================================

#[tool_handler]
impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "PDF Reader MCP Server provides tools for extracting text and metadata \
                 from PDF files and searching their content line by line."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server with default limits
pub async fn run_server() -> anyhow::Result<()> {
    run_server_with_config(ServerConfig::default()).await
}

/// Run the MCP server with full configuration
pub async fn run_server_with_config(config: ServerConfig) -> anyhow::Result<()> {
    let server = PdfServer::with_config(config);

    tracing::info!("PDF Reader MCP Server ready, waiting for connections...");

    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}
