//! Cursor-position protection check for live typing.
//!
//! The engine itself never inspects an editor; the host calls this pure
//! helper with the document text and cursor position, then passes the
//! verdict to [`crate::Engine::dispatch_keystroke`] as `cursor_protected`.

/// True when the cursor sits inside a construct that live correction must
/// not touch: front-matter, an open fenced code block, or an unclosed
/// inline construct (code span, wikilink, URL, Markdown link target) on
/// the current line.
///
/// `line` is zero-based; `column` is a byte offset into that line.
pub fn cursor_in_protected_zone(document: &str, line: usize, column: usize) -> bool {
    let lines: Vec<&str> = document.split('\n').collect();
    let Some(current) = lines.get(line) else {
        return false;
    };

    // Front-matter block at document start.
    if lines.first().is_some_and(|l| l.trim() == "---")
        && let Some(end) = lines.iter().skip(1).position(|l| l.trim() == "---")
        && line <= end + 1
    {
        return true;
    }

    // Fenced code: an odd number of fences before the cursor means we are
    // inside one, provided a closer exists somewhere after.
    let offset = byte_offset(&lines, line, column);
    let (before, after) = document.split_at(offset);
    if before.matches("```").count() % 2 == 1 && after.contains("```") {
        return true;
    }

    // Unclosed inline constructs on the current line, left of the cursor.
    let mut col = column.min(current.len());
    while !current.is_char_boundary(col) {
        col -= 1;
    }
    let line_before = &current[..col];

    if line_before.matches('`').count() % 2 == 1 {
        return true;
    }
    if let Some(open) = line_before.rfind("[[")
        && !line_before[open..].contains("]]")
    {
        return true;
    }
    if let Some(token) = line_before.split_whitespace().next_back()
        && (token.starts_with("http://") || token.starts_with("https://"))
    {
        return true;
    }
    if let Some(open) = line_before.rfind("](")
        && !line_before[open..].contains(')')
    {
        return true;
    }

    false
}

fn byte_offset(lines: &[&str], line: usize, column: usize) -> usize {
    let mut offset = 0;
    for l in &lines[..line] {
        offset += l.len() + 1;
    }
    offset + column.min(lines[line].len())
}
