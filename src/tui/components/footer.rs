//! # Footer
//!
//! Address and phone, the week's opening hours, and the key hints for the
//! current context. Two rows on wide terminals; the hours row is dropped
//! when compact.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::content::CONTACT;
use crate::core::seo::opening_summary;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct Footer<'a> {
    pub compact: bool,
    pub hints: &'a str,
}

impl Footer<'_> {
    /// Rows the footer takes, top border included.
    pub fn height(compact: bool) -> u16 {
        if compact { 3 } else { 4 }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{}, {}", CONTACT.street, CONTACT.city),
                theme::muted(),
            ),
            Span::styled("  ·  ", theme::muted()),
            Span::styled(CONTACT.phone, theme::accent()),
        ])];
        if !self.compact {
            lines.push(Line::styled(opening_summary(), theme::muted()));
        }
        lines.push(Line::styled(self.hints.to_string(), theme::muted()));
        lines
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme::muted());
        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}
