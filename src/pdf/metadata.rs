//! Metadata projection
//!
//! Pure projection of a [`Document`] into ordered (label, value) pairs.
//! Absent optional fields render as the literal "Unknown".

use crate::pdf::loader::{Document, DocumentInfo};

const UNKNOWN: &str = "Unknown";

/// Derive display text from a camelCase field name: insert a space before each
/// internal capitalized segment and capitalize the first letter.
/// `"creationDate"` becomes `"Creation Date"`.
pub fn display_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label
}

/// Descriptive fields from the information dictionary, in report order.
pub fn info_fields(info: &DocumentInfo) -> Vec<(String, String)> {
    fn value(field: &Option<String>) -> String {
        field.clone().unwrap_or_else(|| UNKNOWN.to_string())
    }

    vec![
        (display_label("author"), value(&info.author)),
        (display_label("title"), value(&info.title)),
        (display_label("subject"), value(&info.subject)),
        (display_label("creator"), value(&info.creator)),
        (display_label("producer"), value(&info.producer)),
        (display_label("creationDate"), value(&info.creation_date)),
        (
            display_label("modificationDate"),
            value(&info.modification_date),
        ),
        (
            display_label("keywords"),
            if info.keywords.is_empty() {
                UNKNOWN.to_string()
            } else {
                info.keywords.join(", ")
            },
        ),
    ]
}

/// Full metadata projection for the `pdf-metadata` report: page count, the
/// descriptive fields, then the encryption flag and format version.
pub fn document_fields(doc: &Document) -> Vec<(String, String)> {
    let mut fields = vec![(display_label("pages"), doc.page_count.to_string())];
    fields.extend(info_fields(&doc.info));
    fields.push((display_label("encrypted"), doc.info.encrypted.to_string()));
    fields.push((
        display_label("version"),
        doc.info
            .version
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
    ));
    fields
}
