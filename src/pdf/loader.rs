//! PDF loading and validation
//!
//! Validates a file path (existence, extension, size) and delegates decoding
//! to lopdf. A [`Document`] is fully materialized before any derived view
//! (text, metadata, search) is produced; nothing is streamed or cached.

use crate::error::{Error, Result};
use lopdf::{Dictionary, Object};
use std::path::Path;

/// Maximum accepted PDF file size (10 MiB)
pub const MAX_PDF_BYTES: u64 = 10 * 1024 * 1024;

/// Descriptive fields from the document information dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    /// Raw PDF date string (e.g. "D:20240101120000Z")
    pub creation_date: Option<String>,
    /// Raw PDF date string
    pub modification_date: Option<String>,
    pub keywords: Vec<String>,
    pub encrypted: bool,
    /// PDF format version from the file header (e.g. "1.5")
    pub version: Option<String>,
}

/// In-memory result of fully decoding one PDF file
#[derive(Debug, Clone)]
pub struct Document {
    pub page_count: u32,
    /// Extracted text of all pages, in page order, joined with line feeds
    pub text: String,
    pub info: DocumentInfo,
}

/// Check that a path exists and carries a `.pdf` extension (case-insensitive).
pub fn validate_pdf_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(Error::InvalidExtension {
            path: path.display().to_string(),
        });
    }

    Ok(())
}

/// Load and fully decode a PDF file.
///
/// Size is checked before the file is read so that an oversized file surfaces
/// as [`Error::FileTooLarge`] rather than being folded into a generic decode
/// failure.
pub fn load_document(path: &Path, max_bytes: u64) -> Result<Document> {
    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(Error::FileTooLarge {
            size,
            max_size: max_bytes,
        });
    }

    let data = std::fs::read(path)?;
    decode_document(&data)
}

/// Decode a PDF from memory into a [`Document`].
pub fn decode_document(data: &[u8]) -> Result<Document> {
    let doc = lopdf::Document::load_mem(data).map_err(|e| Error::DecodeFailure {
        reason: e.to_string(),
    })?;

    let pages = doc.get_pages();
    let page_count = pages.len() as u32;

    let mut text = String::new();
    for &page_number in pages.keys() {
        let page_text = doc
            .extract_text(&[page_number])
            .map_err(|e| Error::DecodeFailure {
                reason: format!("page {}: {}", page_number, e),
            })?;
        text.push_str(&page_text);
        if !text.ends_with('\n') {
            text.push('\n');
        }
    }

    let info = document_info(&doc);

    Ok(Document {
        page_count,
        text,
        info,
    })
}

fn document_info(doc: &lopdf::Document) -> DocumentInfo {
    let mut info = DocumentInfo {
        encrypted: doc.is_encrypted(),
        version: Some(doc.version.clone()),
        ..DocumentInfo::default()
    };

    let dict = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| match obj {
            Object::Reference(id) => doc.get_object(*id).ok(),
            other => Some(other),
        })
        .and_then(|obj| obj.as_dict().ok());

    if let Some(dict) = dict {
        info.title = info_string(dict, b"Title");
        info.author = info_string(dict, b"Author");
        info.subject = info_string(dict, b"Subject");
        info.creator = info_string(dict, b"Creator");
        info.producer = info_string(dict, b"Producer");
        info.creation_date = info_string(dict, b"CreationDate");
        info.modification_date = info_string(dict, b"ModDate");
        if let Some(raw) = info_string(dict, b"Keywords") {
            info.keywords = raw
                .split([',', ';'])
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect();
        }
    }

    info
}

fn info_string(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key) {
        Ok(Object::String(bytes, _)) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

/// PDF text strings are either UTF-16BE (with BOM) or PDFDocEncoding; the
/// latter is close enough to Latin-1 that a lossy UTF-8 read is acceptable.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(stripped) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = stripped
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_nonexistent_path() {
        let result = validate_pdf_path(Path::new("/nonexistent/path/file.pdf"));
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
    }

    #[test]
    fn test_validate_rejects_txt_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text").unwrap();

        let result = validate_pdf_path(&path);
        assert!(matches!(result, Err(Error::InvalidExtension { .. })));
    }

    #[test]
    fn test_validate_accepts_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("REPORT.PDF");
        std::fs::write(&path, b"not a real pdf").unwrap();

        assert!(validate_pdf_path(&path).is_ok());

        // The extension check passes; the garbage content must surface as a
        // decode failure, not an extension error.
        let result = load_document(&path, MAX_PDF_BYTES);
        assert!(matches!(result, Err(Error::DecodeFailure { .. })));
    }

    #[test]
    fn test_oversized_file_rejected_before_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; 11 * 1024 * 1024]).unwrap();

        let result = load_document(&path, MAX_PDF_BYTES);
        match result {
            Err(Error::FileTooLarge { size, max_size }) => {
                assert_eq!(size, 11 * 1024 * 1024);
                assert_eq!(max_size, MAX_PDF_BYTES);
            }
            other => panic!("expected FileTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_document(b"not a valid PDF file");
        assert!(matches!(result, Err(Error::DecodeFailure { .. })));
    }

    #[test]
    fn test_decode_pdf_string_utf16be() {
        // "Hi" as UTF-16BE with BOM
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_pdf_string(&bytes), "Hi");
    }

    #[test]
    fn test_decode_pdf_string_plain() {
        assert_eq!(decode_pdf_string(b"Plain Title"), "Plain Title");
    }
}
