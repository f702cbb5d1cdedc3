//! # Loading Indicators
//!
//! A braille spinner for in-flight work and skeleton rows standing in for
//! content that has not arrived yet. Both are driven by the event loop's
//! frame counter, so they animate only while the loop redraws.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(frame_index: usize) -> &'static str {
    SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()]
}

/// `⠋ Sending...`
pub struct Spinner<'a> {
    pub label: &'a str,
    pub frame_index: usize,
}

impl Spinner<'_> {
    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(spinner_glyph(self.frame_index), theme::accent()),
            Span::raw(" "),
            Span::styled(self.label.to_string(), theme::muted()),
        ])
    }
}

impl Component for Spinner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}

/// Placeholder rows of varying width, shimmering with the frame counter.
pub struct Skeleton {
    pub rows: u16,
    pub frame_index: usize,
}

impl Skeleton {
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        (0..self.rows as usize)
            .map(|row| {
                // Rows alternate between full and two-thirds width
                let len = usize::from(if row % 2 == 0 { width } else { width * 2 / 3 });
                let bright = (row + self.frame_index / 3) % self.rows.max(1) as usize == 0;
                let style = if bright { theme::accent() } else { theme::muted() };
                Line::from(Span::styled("░".repeat(len), style))
            })
            .collect()
    }
}

impl Component for Skeleton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines(area.width)), area);
    }
}
