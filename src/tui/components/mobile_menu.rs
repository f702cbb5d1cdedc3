//! # Mobile Menu
//!
//! Page list overlay for narrow terminals, toggled with Ctrl+N.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MobileMenuState` lives in `TuiState`
//! - `MobileMenu` is created each frame with borrowed state
//!
//! Whether the menu is open is site state (`AppState::mobile_menu_open`);
//! this module only tracks the highlighted row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use crate::core::state::Tab;
use crate::tui::component::EventHandler;
use crate::tui::components::modal::Modal;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub struct MobileMenuState {
    pub list_state: ListState,
}

impl MobileMenuState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    /// Start the highlight on the page being shown.
    pub fn open_at(&mut self, tab: Tab) {
        self.list_state.select(Some(tab.index()));
    }

    fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}

impl Default for MobileMenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the mobile menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobileMenuEvent {
    Navigate(Tab),
    Dismiss,
}

impl EventHandler for MobileMenuState {
    type Event = MobileMenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MobileMenuEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleMenu => Some(MobileMenuEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::FocusPrev => {
                self.list_state.select(Some(self.selected().saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown | TuiEvent::FocusNext => {
                let last = Tab::ALL.len() - 1;
                self.list_state.select(Some((self.selected() + 1).min(last)));
                None
            }
            TuiEvent::Submit => Some(MobileMenuEvent::Navigate(Tab::ALL[self.selected()])),
            TuiEvent::SelectTab(tab) => Some(MobileMenuEvent::Navigate(*tab)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu overlay.
pub struct MobileMenu<'a> {
    state: &'a mut MobileMenuState,
    active: Tab,
}

impl<'a> MobileMenu<'a> {
    pub fn new(state: &'a mut MobileMenuState, active: Tab) -> Self {
        Self { state, active }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = Modal::new("Menu", "Enter Go  Esc Close")
            .size(60, 50)
            .render(frame, area);

        let selected = self.state.selected();
        let items: Vec<ListItem> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let marker = if *tab == self.active { " •" } else { "" };
                let style = if i == selected {
                    theme::selected()
                } else {
                    theme::accent()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("F{}  ", i + 1), theme::muted()),
                    Span::styled(format!("{}{}", tab.label(), marker), style),
                ]))
            })
            .collect();

        frame.render_stateful_widget(List::new(items), inner, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn arrows_move_and_clamp() {
        let mut menu = MobileMenuState::new();
        assert_eq!(menu.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(menu.selected(), 0);
        for _ in 0..10 {
            menu.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(menu.selected(), Tab::ALL.len() - 1);
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit),
            Some(MobileMenuEvent::Navigate(Tab::Contact))
        );
    }

    #[test]
    fn open_at_highlights_current_page() {
        let mut menu = MobileMenuState::new();
        menu.open_at(Tab::Services);
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit),
            Some(MobileMenuEvent::Navigate(Tab::Services))
        );
    }

    #[test]
    fn escape_and_toggle_dismiss() {
        let mut menu = MobileMenuState::new();
        assert_eq!(
            menu.handle_event(&TuiEvent::Escape),
            Some(MobileMenuEvent::Dismiss)
        );
        assert_eq!(
            menu.handle_event(&TuiEvent::ToggleMenu),
            Some(MobileMenuEvent::Dismiss)
        );
    }

    #[test]
    fn render_lists_pages() {
        let backend = TestBackend::new(50, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MobileMenuState::new();
        terminal
            .draw(|f| MobileMenu::new(&mut state, Tab::About).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Menu"));
        assert!(text.contains("About •"));
        assert!(text.contains("Contact"));
    }
}
