//! # Notification
//!
//! Toast shown after a contact submission. Sits in the top-right corner on
//! wide terminals and spans the width when compact. Enter or Esc dismisses.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::state::{Notification, NotificationKind};
use crate::tui::theme;

pub struct NotificationToast<'a> {
    pub notification: &'a Notification,
    pub compact: bool,
}

impl<'a> NotificationToast<'a> {
    pub fn new(notification: &'a Notification, compact: bool) -> Self {
        Self {
            notification,
            compact,
        }
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let (icon, style) = match self.notification.kind {
            NotificationKind::Success => ("✔", theme::success()),
            NotificationKind::Failure => ("✖", theme::failure()),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(Line::from(vec![
                Span::styled(format!(" {icon} "), style),
                Span::styled(
                    format!("{} ", self.notification.title),
                    style.add_modifier(Modifier::BOLD),
                ),
            ]))
            .title_bottom(Line::styled(" Enter Dismiss ", theme::muted()).right_aligned());
        Paragraph::new(self.notification.body.clone())
            .style(ratatui::style::Style::default().fg(theme::BODY))
            .block(block)
            .wrap(Wrap { trim: true })
    }

    /// Where the toast goes inside `area`.
    pub fn placement(&self, area: Rect) -> Rect {
        let width = if self.compact {
            area.width
        } else {
            area.width.min(48)
        };
        let height = (self.paragraph().line_count(width) as u16).min(area.height);
        Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rect = self.placement(area);
        frame.render_widget(Clear, rect);
        frame.render_widget(self.paragraph(), rect);
    }
}
