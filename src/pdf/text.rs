//! Text cleanup for extracted PDF content

/// Normalize whitespace in extracted text: collapse runs of horizontal
/// whitespace to a single space, collapse runs of blank lines to a single
/// blank line, and trim leading/trailing whitespace.
pub fn clean_text(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut last_blank = false;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if !last_blank && !lines.is_empty() {
                lines.push(String::new());
                last_blank = true;
            }
        } else {
            lines.push(collapsed);
            last_blank = false;
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
