//! PDF processing layer
//!
//! Path validation and document loading (decoding delegated to lopdf),
//! metadata projection, text cleanup, and line-oriented search.

mod loader;
mod metadata;
mod search;
mod text;

pub use loader::{
    decode_document, load_document, validate_pdf_path, Document, DocumentInfo, MAX_PDF_BYTES,
};
pub use metadata::{display_label, document_fields, info_fields};
pub use search::{search_lines, LineMatch, SearchOptions};
pub use text::clean_text;
