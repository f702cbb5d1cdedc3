//! Stateless editing and wrapping helpers for `TextField`.
//!
//! Positions are byte offsets into the buffer and always sit on a char
//! boundary.

/// Border width on each side of the bordered field.
pub(super) const BORDER: u16 = 1;

/// Textwrap options matching how multi-line fields lay out their content.
pub(super) fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wrapped display lines for `text` at `width`. Always at least one line.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map(|i| pos + i).unwrap_or(text.len())
}

pub(super) fn home(text: &str, pos: usize) -> usize {
    line_start(text, pos)
}

pub(super) fn end(text: &str, pos: usize) -> usize {
    line_end(text, pos)
}

/// Byte offset `chars` characters into the line starting at `start`,
/// clamped to that line's end.
fn offset_in_line(text: &str, start: usize, chars: usize) -> usize {
    let end = line_end(text, start);
    text[start..end]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| start + i)
        .unwrap_or(end)
}

/// Move to the same column of the previous (`up`) or next logical line.
/// Returns `None` at the first or last line.
pub(super) fn move_line(text: &str, pos: usize, up: bool) -> Option<usize> {
    let start = line_start(text, pos);
    let column = text[start..pos].chars().count();
    if up {
        if start == 0 {
            return None;
        }
        let prev_start = line_start(text, start - 1);
        Some(offset_in_line(text, prev_start, column))
    } else {
        let end = line_end(text, pos);
        if end == text.len() {
            return None;
        }
        Some(offset_in_line(text, end + 1, column))
    }
}

/// Wrapped (row, column) of the cursor inside a multi-line field.
pub(super) fn cursor_row_col(text: &str, pos: usize, width: u16) -> (u16, u16) {
    let before = &text[..pos];
    let row = wrapped_lines(before, width).len().saturating_sub(1) as u16;

    // textwrap trims the space at a break, so count chars from the last
    // newline instead of measuring the wrapped line
    let logical = &before[line_start(before, before.len())..];
    let segments = textwrap::wrap(logical, wrap_options(width));
    let in_prev_segments: usize = segments
        .iter()
        .take(segments.len().saturating_sub(1))
        .map(|seg| seg.chars().count())
        .sum();
    let col = logical.chars().count().saturating_sub(in_prev_segments) as u16;
    (row, col.min(width.saturating_sub(1)))
}
