//! # Button
//!
//! One-line call to action: `[ Book Now ]`. Stateless; the parent decides
//! whether it has focus or is disabled.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::format::join_labels;
use crate::tui::component::Component;
use crate::tui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Secondary,
}

pub struct Button<'a> {
    pub label: &'a str,
    pub hint: Option<&'a str>,
    pub variant: Variant,
    pub focused: bool,
    pub disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            hint: None,
            variant: Variant::Primary,
            focused: false,
            disabled: false,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// State flags, for logs and tests: `"primary focused"`.
    pub fn describe(&self) -> String {
        join_labels(&[
            ("primary", self.variant == Variant::Primary),
            ("secondary", self.variant == Variant::Secondary),
            ("focused", self.focused),
            ("disabled", self.disabled),
        ])
    }

    fn style(&self) -> Style {
        if self.disabled {
            return theme::muted();
        }
        let base = match self.variant {
            Variant::Primary => Style::default().fg(Color::Black).bg(theme::ACCENT),
            Variant::Secondary => theme::accent(),
        };
        if self.focused {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(format!("[ {} ]", self.label), self.style())];
        if let Some(hint) = self.hint {
            spans.push(Span::styled(format!(" {hint}"), theme::muted()));
        }
        Line::from(spans)
    }

    /// Width the button needs on screen, hint included.
    pub fn width(&self) -> u16 {
        self.line().width() as u16
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}
