//! # NavBar Component
//!
//! Top bar: business name on the left, page tabs on the right.
//!
//! ## Layouts
//!
//! 1. **Wide**: `Sharp Corner Barbershop   F1 Home  F2 About  F3 Services  F4 Contact`
//! 2. **Compact**: `Sharp Corner Barbershop   About  ≡ Menu ^N`
//!
//! The compact layout shows only the active page and the menu toggle; the
//! tab list moves into the mobile menu overlay.
//!
//! Stateless: every field is a prop. The parent decides `compact` from the
//! terminal width.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::content::CONTACT;
use crate::core::state::Tab;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct NavBar {
    pub active: Tab,
    pub compact: bool,
    pub menu_open: bool,
}

impl NavBar {
    pub fn new(active: Tab, compact: bool, menu_open: bool) -> Self {
        Self {
            active,
            compact,
            menu_open,
        }
    }

    fn brand(&self) -> Line<'static> {
        Line::from(Span::styled(
            format!(" ✂ {}", CONTACT.business_name),
            theme::accent().add_modifier(Modifier::BOLD),
        ))
    }

    fn tabs(&self) -> Line<'static> {
        if self.compact {
            let toggle = if self.menu_open { "✕ Close" } else { "≡ Menu" };
            return Line::from(vec![
                Span::styled(self.active.label(), theme::selected()),
                Span::raw("  "),
                Span::styled(toggle, theme::accent()),
                Span::styled(" ^N ", theme::muted()),
            ])
            .right_aligned();
        }

        let mut spans = Vec::new();
        for (i, tab) in Tab::ALL.iter().enumerate() {
            spans.push(Span::styled(format!("F{} ", i + 1), theme::muted()));
            let style = if *tab == self.active {
                theme::selected()
            } else {
                theme::accent()
            };
            spans.push(Span::styled(tab.label(), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans).right_aligned()
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let brand = self.brand();
        let [brand_area, tabs_area] = Layout::horizontal([
            Constraint::Length(brand.width() as u16 + 2),
            Constraint::Min(0),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(brand), brand_area);
        frame.render_widget(Paragraph::new(self.tabs()), tabs_area);
    }
}
