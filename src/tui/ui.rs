//! Layout shell: nav bar, the active page, footer, then any overlay on top.
//!
//! Everything is read through a [`Scope`]. A detached scope means the shell
//! was wired without a store; drawing stops with `StoreError::OutsideProvider`
//! instead of painting an empty site.

use chrono::{Datelike, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::core::state::{AppState, Tab};
use crate::core::store::{Scope, StoreError};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::booking_modal::booking_hint;
use crate::tui::components::{
    AboutPage, BookingModal, ContactPage, Footer, HomePage, MobileMenu, NavBar,
    NotificationToast, ServicesPage,
};

/// Terminals narrower than this get the collapsed navigation.
pub const MOBILE_BREAKPOINT: u16 = 80;

pub fn draw_ui(frame: &mut Frame, scope: Scope<'_>, tui: &mut TuiState) -> Result<(), StoreError> {
    let state = scope.app_state()?;
    let area = frame.area();
    tui.compact = area.width < MOBILE_BREAKPOINT;

    use Constraint::{Length, Min};
    let [nav_area, _, main_area, footer_area] = Layout::vertical([
        Length(1),
        Length(1),
        Min(0),
        Length(Footer::height(tui.compact)),
    ])
    .areas(area);

    NavBar::new(state.active_tab, tui.compact, state.mobile_menu_open).render(frame, nav_area);

    let page_area = main_area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    draw_page(frame, page_area, state, tui);

    let hints = footer_hints(state, tui.compact);
    Footer {
        compact: tui.compact,
        hints: &hints,
    }
    .render(frame, footer_area);

    // Overlays, bottom to top. The toast is last so booking results show
    // over the modal.
    if state.mobile_menu_open {
        MobileMenu::new(&mut tui.mobile_menu, state.active_tab).render(frame, area);
    }
    if state.booking.open {
        BookingModal::new(
            &mut tui.booking_modal,
            &state.booking,
            tui.compact,
            tui.frame_index,
        )
        .render(frame, area);
    }
    if let Some(notification) = &state.notification {
        NotificationToast::new(notification, tui.compact).render(frame, main_area);
    }
    Ok(())
}

fn draw_page(frame: &mut Frame, area: Rect, state: &AppState, tui: &mut TuiState) {
    match state.active_tab {
        Tab::Home => HomePage {
            scroll: &mut tui.scroll,
        }
        .render(frame, area),
        Tab::About => AboutPage {
            scroll: &mut tui.scroll,
            today: Some(Local::now().weekday().num_days_from_monday()),
        }
        .render(frame, area),
        Tab::Services => ServicesPage {
            scroll: &mut tui.scroll,
        }
        .render(frame, area),
        Tab::Contact => ContactPage {
            form: &mut tui.contact_form,
            state,
            compact: tui.compact,
            frame_index: tui.frame_index,
        }
        .render(frame, area),
    }
}

/// Key hints for whatever currently has the keyboard.
pub fn footer_hints(state: &AppState, compact: bool) -> String {
    if state.notification.is_some() {
        return "Enter Dismiss".to_string();
    }
    if state.booking.open {
        return booking_hint();
    }
    if state.mobile_menu_open {
        return "↑↓ Move  Enter Go  Esc Close".to_string();
    }
    let nav = if compact { "^N Menu" } else { "F1-F4 Pages" };
    let page = match state.active_tab {
        Tab::Contact => "Tab Next field  Enter Next/Send",
        _ => "↑↓ Scroll  Enter Book",
    };
    format!("{page}  {nav}  ^B Book  ^C Quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::state::{Notification, NotificationKind};
    use crate::test_support::test_store;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(width: u16, height: u16, scope: Scope<'_>, tui: &mut TuiState) -> (String, Result<(), StoreError>) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut result = Ok(());
        terminal
            .draw(|f| result = draw_ui(f, scope, tui))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (text, result)
    }

    #[test]
    fn detached_scope_is_an_error() {
        let mut tui = TuiState::new();
        let (_, result) = draw(100, 30, Scope::detached(), &mut tui);
        assert_eq!(result, Err(StoreError::OutsideProvider));
    }

    #[test]
    fn wide_layout_has_tabs_and_footer() {
        let store = test_store();
        let mut tui = TuiState::new();
        let (text, result) = draw(100, 30, store.scope(), &mut tui);
        assert!(result.is_ok());
        assert!(!tui.compact);
        assert!(text.contains("F3 Services"));
        assert!(text.contains("214 Market Street"));
        assert!(text.contains("F1-F4 Pages"));
    }

    #[test]
    fn narrow_layout_collapses_navigation() {
        let store = test_store();
        let mut tui = TuiState::new();
        let (text, _) = draw(60, 30, store.scope(), &mut tui);
        assert!(tui.compact);
        assert!(text.contains("Menu"));
        assert!(text.contains("^N Menu"));
    }

    #[test]
    fn each_tab_renders_its_page() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        for (tab, marker) in [
            (Tab::Home, "FEATURED SERVICES"),
            (Tab::About, "OPENING HOURS"),
            (Tab::Services, "SERVICES & PRICES"),
            (Tab::Contact, "Send Message"),
        ] {
            store.set_active_tab(tab);
            tui.scroll = Default::default();
            let (text, _) = draw(100, 60, store.scope(), &mut tui);
            assert!(text.contains(marker), "{tab:?} page missing {marker}");
        }
    }

    #[test]
    fn overlays_draw_on_top() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        store.toggle_mobile_menu();
        let (text, _) = draw(60, 30, store.scope(), &mut tui);
        assert!(text.contains("Enter Go"));

        store.close_mobile_menu();
        store.dispatch(Action::OpenBooking);
        let (text, _) = draw(100, 30, store.scope(), &mut tui);
        assert!(text.contains("Book an Appointment"));
        assert!(text.contains("Booking opens"));
    }

    #[test]
    fn notification_is_shown_with_dismiss_hint() {
        let mut store = test_store();
        store.dispatch(Action::ShowNotification(Notification {
            kind: NotificationKind::Success,
            title: "Message sent".into(),
            body: "Thanks!".into(),
        }));
        let mut tui = TuiState::new();
        let (text, _) = draw(100, 30, store.scope(), &mut tui);
        assert!(text.contains("Message sent"));
        assert_eq!(footer_hints(store.state(), false), "Enter Dismiss");
    }

    #[test]
    fn booking_result_toast_draws_over_modal() {
        let mut store = test_store();
        store.dispatch(Action::OpenBooking);
        store.dispatch(Action::BookingFinished(Err(crate::mail::SubmissionError {
            message: "API error (HTTP 500)".into(),
            code: "500".into(),
        })));
        assert!(store.state().booking.open);

        let mut tui = TuiState::new();
        let (text, _) = draw(100, 30, store.scope(), &mut tui);
        assert!(text.contains("Booking not sent"));
        assert!(text.contains("Enter Dismiss"));
    }
}
