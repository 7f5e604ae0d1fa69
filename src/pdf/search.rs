//! Line-oriented text search
//!
//! Scans extracted text line by line for a query, with case-sensitivity and
//! whole-word options, producing per-line match counts.

use crate::error::{Error, Result};
use regex::Regex;
use std::borrow::Cow;

/// Options for [`search_lines`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Match with the query's original casing (default: false)
    pub case_sensitive: bool,
    /// Match whole words only (default: false)
    pub whole_word: bool,
}

/// One matching line, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number
    pub line_number: usize,
    /// The matching line, trimmed, with its original casing
    pub content: String,
    /// Non-overlapping occurrences of the query on this line
    pub match_count: usize,
}

/// Search `text` line by line for `query`.
///
/// Lines are split on line feeds and numbered from 1. Case-insensitive search
/// lower-cases both haystack and query before matching; the reported content
/// is always the original line, trimmed. Whole-word search anchors the escaped
/// literal query between word boundaries. An empty query matches nothing.
pub fn search_lines(text: &str, query: &str, options: &SearchOptions) -> Result<Vec<LineMatch>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let needle = if options.case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };

    let word_pattern = if options.whole_word {
        let pattern = format!(r"\b{}\b", regex::escape(&needle));
        Some(Regex::new(&pattern).map_err(|e| Error::InvalidQuery {
            reason: e.to_string(),
        })?)
    } else {
        None
    };

    let mut matches = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        let haystack: Cow<'_, str> = if options.case_sensitive {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(line.to_lowercase())
        };

        let count = match &word_pattern {
            Some(re) => re.find_iter(&haystack).count(),
            None => haystack.matches(needle.as_str()).count(),
        };

        if count > 0 {
            matches.push(LineMatch {
                line_number: index + 1,
                content: line.trim().to_string(),
                match_count: count,
            });
        }
    }

    Ok(matches)
}
