//! # Modal
//!
//! Base overlay shared by the booking dialog, the mobile menu and
//! notifications: clears what is underneath, draws a titled frame with a
//! key hint along the bottom edge, and hands back the inner area.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding};

use crate::tui::theme;

pub struct Modal<'a> {
    pub title: &'a str,
    pub help: &'a str,
    pub percent_x: u16,
    pub percent_y: u16,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str, help: &'a str) -> Self {
        Self {
            title,
            help,
            percent_x: 70,
            percent_y: 60,
        }
    }

    pub fn size(mut self, percent_x: u16, percent_y: u16) -> Self {
        self.percent_x = percent_x.min(100);
        self.percent_y = percent_y.min(100);
        self
    }

    /// Draws the frame centered in `area` and returns the content area inside it.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let overlay = centered_rect(self.percent_x, self.percent_y, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent())
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(format!(" {} ", self.help)).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);
        inner
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
