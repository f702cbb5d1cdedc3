//! # Card
//!
//! Bordered block with a title, an optional right-aligned badge (a price,
//! a rating) and wrapped body text. Cards live inside scroll views, so they
//! report the height they need for a given width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme;

#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub badge: Option<String>,
    pub body: Text<'static>,
    pub highlighted: bool,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<Text<'static>>) -> Self {
        Self {
            title: title.into(),
            badge: None,
            body: body.into(),
            highlighted: false,
        }
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn paragraph(&self) -> Paragraph<'static> {
        let border = theme::border(self.highlighted);
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::styled(
                format!(" {} ", self.title),
                theme::accent().add_modifier(Modifier::BOLD),
            ));
        if let Some(badge) = &self.badge {
            block = block.title(Line::styled(format!(" {badge} "), theme::accent()).right_aligned());
        }
        Paragraph::new(self.body.clone())
            .style(ratatui::style::Style::default().fg(theme::BODY))
            .block(block)
            .wrap(Wrap { trim: true })
    }

    /// Rows needed at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width) as u16
    }
}

impl Component for Card {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn height_includes_borders() {
        let card = Card::new("Classic Cut", "Scissor cut and style");
        assert_eq!(card.height(40), 3);
    }

    #[test]
    fn height_grows_when_body_wraps() {
        let card = Card::new("Classic Cut", "one two three four five six seven");
        assert!(card.height(12) > 3);
    }

    #[test]
    fn renders_title_and_badge() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut card = Card::new("Skin Fade", "Tight fade").badge("$35");
        terminal.draw(|f| card.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Skin Fade"));
        assert!(text.contains("$35"));
        assert!(text.contains("Tight fade"));
    }
}
