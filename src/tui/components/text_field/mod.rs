//! # TextField Component
//!
//! Labelled input for the contact form. Single-line fields scroll
//! horizontally; the message field wraps and scrolls vertically.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` and `error` are
//! props set by the form each frame. The contact draft in `AppState` stays
//! the source of truth: every edit is reported as `FieldEvent::Changed`,
//! and `set_value` pulls the draft back in after a reset.

mod edit;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

use edit::{
    BORDER, cursor_row_col, end, home, move_line, next_char_boundary, prev_char_boundary,
    wrapped_lines,
};

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The buffer changed; carries the new value.
    Changed(String),
    /// Enter in a single-line field.
    Submit,
}

pub struct TextField {
    pub label: &'static str,
    pub required: bool,
    pub multiline: bool,
    /// Prop: whether the field has keyboard focus.
    pub focused: bool,
    /// Prop: validation message shown under the label.
    pub error: Option<String>,
    buffer: String,
    /// Byte offset into `buffer`
    cursor: usize,
    /// First visible wrapped row (multi-line only)
    scroll_offset: u16,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            required: false,
            multiline: false,
            focused: false,
            error: None,
            buffer: String::new(),
            cursor: 0,
            scroll_offset: 0,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer without emitting an event. Cursor moves to the end.
    pub fn set_value(&mut self, value: &str) {
        if self.buffer != value {
            self.buffer = value.to_string();
            self.cursor = self.buffer.len();
            self.scroll_offset = 0;
        }
    }

    /// Height this field wants: one row for single-line, `rows` for multi-line.
    pub fn height(&self, rows: u16) -> u16 {
        let content = if self.multiline { rows.max(1) } else { 1 };
        content + BORDER * 2
    }

    fn insert(&mut self, text: &str) -> Option<FieldEvent> {
        let text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\n', '\r'], " ")
        };
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
        self.changed()
    }

    fn changed(&self) -> Option<FieldEvent> {
        Some(FieldEvent::Changed(self.buffer.clone()))
    }

    fn move_to(&mut self, pos: usize) -> Option<FieldEvent> {
        self.cursor = pos;
        None
    }

    fn border_style(&self) -> ratatui::style::Style {
        if self.error.is_some() {
            theme::failure()
        } else {
            theme::border(self.focused)
        }
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(format!(" {}", self.label), theme::border(self.focused))];
        if self.required {
            spans.push(Span::styled(" *", theme::accent()));
        }
        spans.push(Span::raw(" "));
        if let Some(error) = &self.error {
            spans.push(Span::styled(format!("{error} "), theme::failure()));
        }
        Line::from(spans)
    }

    /// Visible text and the cursor's offset inside the content area.
    fn layout(&mut self, inner: Rect) -> (Vec<Line<'static>>, (u16, u16)) {
        if self.multiline {
            let lines = wrapped_lines(&self.buffer, inner.width);
            let (row, col) = cursor_row_col(&self.buffer, self.cursor, inner.width);
            let visible = inner.height.max(1);
            if row < self.scroll_offset {
                self.scroll_offset = row;
            } else if row >= self.scroll_offset + visible {
                self.scroll_offset = row + 1 - visible;
            }
            let shown = lines
                .into_iter()
                .skip(self.scroll_offset as usize)
                .take(visible as usize)
                .map(Line::from)
                .collect();
            (shown, (col, row - self.scroll_offset))
        } else {
            let col = self.buffer[..self.cursor].chars().count() as u16;
            let width = inner.width.max(1);
            let skip = col.saturating_sub(width - 1);
            let shown: String = self.buffer.chars().skip(skip as usize).collect();
            (vec![Line::from(shown)], (col - skip, 0))
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(self.title());
        let inner = block.inner(area);
        let (lines, (col, row)) = self.layout(inner);

        frame.render_widget(
            Paragraph::new(lines)
                .style(ratatui::style::Style::default().fg(theme::BODY))
                .block(block),
            area,
        );

        if self.focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + col, inner.y + row));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Submit if self.multiline => self.insert("\n"),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.move_to(prev_char_boundary(&self.buffer, self.cursor))
            }
            TuiEvent::CursorRight if self.cursor < self.buffer.len() => {
                self.move_to(next_char_boundary(&self.buffer, self.cursor))
            }
            TuiEvent::CursorHome => self.move_to(home(&self.buffer, self.cursor)),
            TuiEvent::CursorEnd => self.move_to(end(&self.buffer, self.cursor)),
            TuiEvent::CursorUp if self.multiline => {
                match move_line(&self.buffer, self.cursor, true) {
                    Some(pos) => self.move_to(pos),
                    None => None,
                }
            }
            TuiEvent::CursorDown if self.multiline => {
                match move_line(&self.buffer, self.cursor, false) {
                    Some(pos) => self.move_to(pos),
                    None => None,
                }
            }
            _ => None,
        }
    }
}
