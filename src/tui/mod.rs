//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the site,
//! and turns key presses into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! key press → TuiEvent → route_event() → Store::dispatch → Effect
//!                                                           │
//!           Action ← mpsc channel ← tokio task ← execute() ─┘
//! ```
//!
//! Overlays get first claim on a key (notification, booking modal, mobile
//! menu), then global shortcuts, then the active page.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (sending, loading slots, revalidation pending): draws
//!   every ~80ms so spinners move and the debounce timer fires on time.
//! - **Idle**: sleeps up to 500ms and only redraws on events or resize.

mod component;
pub mod components;
mod event;
pub mod markdown;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect};
use crate::core::booking::{AvailabilityService, MockAvailability, next_open_day, open_url};
use crate::core::config::ResolvedConfig;
use crate::core::content::{CONTACT, SERVICES};
use crate::core::format::Debouncer;
use crate::core::seo::{Head, PageMeta};
use crate::core::state::{Notification, NotificationKind, Tab};
use crate::core::store::Store;
use crate::mail::{EmailJsProvider, EmailProvider, Templates, submit_booking, submit_contact};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookingEvent, BookingModalState, ContactFormEvent, ContactFormState, MobileMenuEvent,
    MobileMenuState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Quiet period after the last keystroke before errors are re-checked.
const REVALIDATE_DELAY: Duration = Duration::from_millis(300);

/// Rows moved per scroll-wheel notch.
const SCROLL_STEP: u16 = 2;

/// TUI-specific presentation state (not part of the site state)
pub struct TuiState {
    // Shared by the three scrolling pages, reset on tab change
    pub scroll: ScrollViewState,
    pub contact_form: ContactFormState,
    pub booking_modal: BookingModalState,
    pub mobile_menu: MobileMenuState,
    pub revalidate: Debouncer,
    pub frame_index: usize,
    /// Set by the last draw from the terminal width.
    pub compact: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollViewState::default(),
            contact_form: ContactFormState::new(),
            booking_modal: BookingModalState::new(),
            mobile_menu: MobileMenuState::new(),
            revalidate: Debouncer::new(REVALIDATE_DELAY),
            frame_index: 0,
            compact: false,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles the background work needs, cloned into spawned tasks.
#[derive(Clone)]
pub struct Services {
    pub email: Arc<dyn EmailProvider>,
    pub templates: Templates,
    pub availability: Arc<dyn AvailabilityService>,
    pub booking_url: String,
}

impl Services {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            email: Arc::new(EmailJsProvider::new(config.emailjs.clone())),
            templates: config.templates.clone(),
            availability: Arc::new(MockAvailability::new(config.availability_delay)),
            booking_url: config.booking_url.clone(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguation lets Ctrl+J and Shift+Tab arrive intact; unsupported
        // terminals ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Route one terminal event. Returns the effect of whatever action it became.
pub fn route_event(store: &mut Store, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return store.dispatch(Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    let state = store.state();
    // A toast holds the keyboard until it is dismissed
    if state.notification.is_some() {
        if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
            return store.dispatch(Action::DismissNotification);
        }
        return Effect::None;
    }

    if state.booking.open {
        tui.booking_modal.sync(&state.booking);
        return match tui.booking_modal.handle_event(event) {
            Some(BookingEvent::SelectService(index)) => {
                store.dispatch(Action::SelectBookingService(index))
            }
            Some(BookingEvent::Confirm) => store.dispatch(Action::CompleteBooking),
            Some(BookingEvent::Dismiss) => store.dispatch(Action::CloseBooking),
            Some(BookingEvent::EditDetails(details)) => {
                store.dispatch(Action::UpdateBookingDetails(details))
            }
            Some(BookingEvent::Back) => store.dispatch(Action::BookingBack),
            None => Effect::None,
        };
    }

    if state.mobile_menu_open {
        return match tui.mobile_menu.handle_event(event) {
            Some(MobileMenuEvent::Navigate(tab)) => select_tab(store, tui, tab),
            Some(MobileMenuEvent::Dismiss) => store.dispatch(Action::CloseMobileMenu),
            None => Effect::None,
        };
    }

    let active = state.active_tab;
    match event {
        TuiEvent::SelectTab(tab) => return select_tab(store, tui, *tab),
        TuiEvent::NextTab => return select_tab(store, tui, active.next()),
        TuiEvent::PrevTab => return select_tab(store, tui, active.prev()),
        TuiEvent::ToggleMenu => {
            tui.mobile_menu.open_at(active);
            return store.dispatch(Action::ToggleMobileMenu);
        }
        TuiEvent::OpenBooking => return store.dispatch(Action::OpenBooking),
        _ => {}
    }

    if active == Tab::Contact {
        return match tui.contact_form.handle_event(event) {
            Some(ContactFormEvent::Edit(patch)) => {
                tui.revalidate.touch(now);
                store.dispatch(Action::UpdateContactDraft(patch))
            }
            Some(ContactFormEvent::Submit) => store.dispatch(Action::SubmitContact),
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::ScrollUp | TuiEvent::CursorUp => {
            for _ in 0..SCROLL_STEP {
                tui.scroll.scroll_up();
            }
        }
        TuiEvent::ScrollDown | TuiEvent::CursorDown => {
            for _ in 0..SCROLL_STEP {
                tui.scroll.scroll_down();
            }
        }
        TuiEvent::ScrollPageUp => tui.scroll.scroll_page_up(),
        TuiEvent::ScrollPageDown => tui.scroll.scroll_page_down(),
        TuiEvent::CursorHome => tui.scroll.scroll_to_top(),
        TuiEvent::CursorEnd => tui.scroll.scroll_to_bottom(),
        // "Book Now" on the content pages
        TuiEvent::Submit => return store.dispatch(Action::OpenBooking),
        TuiEvent::InputChar('q') => return store.dispatch(Action::Quit),
        _ => {}
    }
    Effect::None
}

fn select_tab(store: &mut Store, tui: &mut TuiState, tab: Tab) -> Effect {
    if store.state().active_tab != tab {
        tui.scroll = ScrollViewState::default();
    }
    store.dispatch(Action::SetActiveTab(tab))
}

/// Carry out an effect. Returns `true` when the loop should exit.
///
/// Network and availability work runs on tokio tasks that report back
/// through `tx`. Opening the booking page starts the opener inline and
/// reaps it on a blocking task.
pub fn execute(
    effect: Effect,
    store: &mut Store,
    services: &Services,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SendContact { id, draft } => {
            info!("Sending contact submission {id}");
            let services = services.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result =
                    submit_contact(services.email.as_ref(), &services.templates, &draft).await;
                match &result {
                    Ok(()) => info!("Contact submission {id} delivered"),
                    Err(e) => warn!("Contact submission {id} failed: {} ({})", e.message, e.code),
                }
                if tx.send(Action::SubmissionFinished(result)).is_err() {
                    warn!("Failed to report submission {id}: receiver dropped");
                }
            });
            false
        }
        Effect::SendBooking { id, request } => {
            info!("Sending booking request {id}");
            let services = services.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result =
                    submit_booking(services.email.as_ref(), &services.templates, &request).await;
                match &result {
                    Ok(()) => info!("Booking request {id} delivered"),
                    Err(e) => warn!("Booking request {id} failed: {} ({})", e.message, e.code),
                }
                if tx.send(Action::BookingFinished(result)).is_err() {
                    warn!("Failed to report booking request {id}: receiver dropped");
                }
            });
            false
        }
        Effect::FetchSlots(index) => {
            let services = services.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let Some(service) = SERVICES.get(index) else {
                    warn!("Availability requested for unknown service {index}");
                    return;
                };
                let slots = match next_open_day(Local::now().date_naive()) {
                    Some(date) => services.availability.available_slots(date, service).await,
                    None => Vec::new(),
                };
                debug!("Loaded {} slots for {}", slots.len(), service.id);
                if tx
                    .send(Action::SlotsLoaded {
                        service: index,
                        slots,
                    })
                    .is_err()
                {
                    warn!("Failed to deliver slots: receiver dropped");
                }
            });
            false
        }
        Effect::OpenBookingPage => {
            info!("Opening booking page {}", services.booking_url);
            if let Err(e) = open_url(&services.booking_url) {
                warn!("Could not open booking page: {e}");
                let effect = store.dispatch(Action::ShowNotification(Notification {
                    kind: NotificationKind::Failure,
                    title: "Couldn't open the booking page".to_string(),
                    body: format!("Visit {} or call {}.", services.booking_url, CONTACT.phone),
                }));
                return execute(effect, store, services, tx);
            }
            false
        }
    }
}

fn set_window_title(head: &mut Head, tab: Tab) {
    head.mount(&PageMeta::for_tab(tab));
    if let Some(title) = head.title()
        && let Err(e) = execute!(stdout(), SetTitle(title))
    {
        debug!("Terminal refused title change: {e}");
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    info!("Starting in {:?} mode", config.mode);
    let services = Services::from_config(&config);
    let mut store = Store::new();
    let mut tui = TuiState::new();
    let mut head = Head::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut titled_tab: Option<Tab> = None;
    let mut needs_redraw = true; // Force first frame
    let mut failure: Option<std::io::Error> = None;

    'main: loop {
        let active = store.state().active_tab;
        if titled_tab != Some(active) {
            set_window_title(&mut head, active);
            titled_tab = Some(active);
        }

        let state = store.state();
        let animating = state.loading
            || state.booking.slots_loading
            || state.booking.sending
            || tui.revalidate.is_pending();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.contact_form.sync(&store.state().contact_draft);
            tui.booking_modal.sync(&store.state().booking);
            tui.frame_index = (start_time.elapsed().as_secs_f32() * 12.0) as usize;

            let mut drawn = Ok(());
            let result = terminal
                .draw(|f| drawn = ui::draw_ui(f, store.scope(), &mut tui))
                .map(|_| ())
                .and_then(|()| drawn.map_err(std::io::Error::other));
            if let Err(e) = result {
                failure = Some(e);
                break 'main;
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain every pending event before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = route_event(&mut store, &mut tui, &event, Instant::now());
            if execute(effect, &mut store, &services, &tx) {
                break 'main;
            }
        }

        if tui.revalidate.fire(Instant::now()) {
            store.dispatch(Action::RevalidateContactForm);
            needs_redraw = true;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = store.dispatch(action);
            if execute(effect, &mut store, &services, &tx) {
                break 'main;
            }
        }
    }

    head.unmount();
    ratatui::restore();
    match failure {
        Some(e) => {
            warn!("Shut down after draw failure: {e}");
            Err(e)
        }
        None => {
            info!("Shut down");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{BookingRequest, BookingStep};
    use crate::test_support::{RecordingProvider, test_store, valid_draft};

    fn route(store: &mut Store, tui: &mut TuiState, events: &[TuiEvent]) -> Vec<Effect> {
        events
            .iter()
            .map(|e| route_event(store, tui, e, Instant::now()))
            .collect()
    }

    fn type_text(store: &mut Store, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            route_event(store, tui, &TuiEvent::InputChar(c), Instant::now());
        }
    }

    fn services(email: Arc<dyn EmailProvider>) -> Services {
        Services {
            email,
            templates: Templates {
                owner_notification: "template_owner".into(),
                auto_reply: "template_reply".into(),
            },
            availability: Arc::new(MockAvailability::new(Duration::ZERO)),
            booking_url: "https://example.com/book".into(),
        }
    }

    #[test]
    fn force_quit_wins_over_overlays() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        store.dispatch(Action::OpenBooking);
        assert_eq!(
            route_event(&mut store, &mut tui, &TuiEvent::ForceQuit, Instant::now()),
            Effect::Quit
        );
    }

    #[test]
    fn function_keys_and_arrows_switch_tabs() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        route(&mut store, &mut tui, &[TuiEvent::SelectTab(Tab::Services)]);
        assert_eq!(store.state().active_tab, Tab::Services);
        route(&mut store, &mut tui, &[TuiEvent::NextTab, TuiEvent::NextTab]);
        assert_eq!(store.state().active_tab, Tab::Home);
        route(&mut store, &mut tui, &[TuiEvent::PrevTab]);
        assert_eq!(store.state().active_tab, Tab::Contact);
    }

    #[test]
    fn mobile_menu_navigates_and_closes() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        route(&mut store, &mut tui, &[TuiEvent::ToggleMenu]);
        assert!(store.state().mobile_menu_open);

        // Keys go to the menu, not the page
        route(
            &mut store,
            &mut tui,
            &[TuiEvent::CursorDown, TuiEvent::CursorDown, TuiEvent::Submit],
        );
        assert!(!store.state().mobile_menu_open);
        assert_eq!(store.state().active_tab, Tab::Services);

        route(&mut store, &mut tui, &[TuiEvent::ToggleMenu, TuiEvent::Escape]);
        assert!(!store.state().mobile_menu_open);
        assert_eq!(store.state().active_tab, Tab::Services);
    }

    #[test]
    fn booking_keys_fetch_then_collect_details() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        let effects = route(
            &mut store,
            &mut tui,
            &[TuiEvent::OpenBooking, TuiEvent::CursorDown, TuiEvent::Submit],
        );
        assert_eq!(
            effects,
            vec![Effect::FetchSlots(0), Effect::FetchSlots(1), Effect::None]
        );
        assert_eq!(store.state().booking.step, BookingStep::Details);

        // Name, Enter to the email field, then Enter sends
        type_text(&mut store, &mut tui, "Sam");
        route(&mut store, &mut tui, &[TuiEvent::Submit]);
        type_text(&mut store, &mut tui, "sam@example.com");
        let effects = route(&mut store, &mut tui, &[TuiEvent::Submit]);
        match &effects[0] {
            Effect::SendBooking { request, .. } => {
                assert_eq!(request.name, "Sam");
                assert_eq!(request.email, "sam@example.com");
                assert_eq!(request.service, SERVICES[1].name);
            }
            other => panic!("expected SendBooking, got {other:?}"),
        }
        assert!(store.state().booking.open);

        assert_eq!(
            store.dispatch(Action::BookingFinished(Ok(()))),
            Effect::OpenBookingPage
        );
        assert!(!store.state().booking.open);
    }

    #[test]
    fn booking_details_escape_goes_back_to_services() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        route(
            &mut store,
            &mut tui,
            &[TuiEvent::OpenBooking, TuiEvent::Submit, TuiEvent::Escape],
        );
        assert!(store.state().booking.open);
        assert_eq!(store.state().booking.step, BookingStep::Choose);
        route(&mut store, &mut tui, &[TuiEvent::Escape]);
        assert!(!store.state().booking.open);
    }

    #[test]
    fn enter_on_home_opens_booking() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        let effects = route(&mut store, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(effects, vec![Effect::FetchSlots(0)]);
        assert!(store.state().booking.open);
    }

    #[test]
    fn typing_on_contact_updates_draft_and_arms_revalidation() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        route(&mut store, &mut tui, &[TuiEvent::SelectTab(Tab::Contact)]);
        type_text(&mut store, &mut tui, "Sam");
        assert_eq!(store.state().contact_draft.name, "Sam");
        assert!(tui.revalidate.is_pending());

        // 'q' is text here, not quit
        type_text(&mut store, &mut tui, "q");
        assert_eq!(store.state().contact_draft.name, "Samq");
    }

    #[test]
    fn send_after_filling_form_requests_delivery() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        route(&mut store, &mut tui, &[TuiEvent::SelectTab(Tab::Contact)]);
        let draft = valid_draft();
        for value in [&draft.name, &draft.email, &draft.phone_number] {
            type_text(&mut store, &mut tui, value);
            route(&mut store, &mut tui, &[TuiEvent::FocusNext]);
        }
        type_text(&mut store, &mut tui, &draft.message);
        let effects = route(&mut store, &mut tui, &[TuiEvent::FocusNext, TuiEvent::Submit]);

        match &effects[1] {
            Effect::SendContact { id, draft: sent } => {
                assert!(id.starts_with("contact"));
                assert_eq!(sent, &draft);
            }
            other => panic!("expected SendContact, got {other:?}"),
        }
        assert!(store.state().loading);
    }

    #[test]
    fn notification_takes_enter_first() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        store.dispatch(Action::ShowNotification(Notification {
            kind: NotificationKind::Success,
            title: "Message sent".into(),
            body: String::new(),
        }));
        let effects = route(&mut store, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(effects, vec![Effect::None]);
        assert!(store.state().notification.is_none());
        assert!(!store.state().booking.open);
    }

    #[test]
    fn notification_blocks_keys_behind_it() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        route(&mut store, &mut tui, &[TuiEvent::SelectTab(Tab::Contact)]);
        store.dispatch(Action::ShowNotification(Notification {
            kind: NotificationKind::Failure,
            title: "Message not sent".into(),
            body: String::new(),
        }));

        let effects = route(
            &mut store,
            &mut tui,
            &[
                TuiEvent::InputChar('x'),
                TuiEvent::OpenBooking,
                TuiEvent::SelectTab(Tab::Home),
            ],
        );
        assert_eq!(effects, vec![Effect::None, Effect::None, Effect::None]);
        assert_eq!(store.state().contact_draft.name, "");
        assert!(!store.state().booking.open);
        assert_eq!(store.state().active_tab, Tab::Contact);
        assert!(store.state().notification.is_some());

        // Escape dismisses, then typing reaches the form again
        route(&mut store, &mut tui, &[TuiEvent::Escape]);
        type_text(&mut store, &mut tui, "x");
        assert_eq!(store.state().contact_draft.name, "x");
    }

    #[test]
    fn notification_blocks_quit_key_on_content_pages() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        store.dispatch(Action::ShowNotification(Notification {
            kind: NotificationKind::Success,
            title: "Message sent".into(),
            body: String::new(),
        }));
        let effects = route(&mut store, &mut tui, &[TuiEvent::InputChar('q')]);
        assert_eq!(effects, vec![Effect::None]);
    }

    #[test]
    fn tab_change_resets_scroll() {
        let mut store = test_store();
        let mut tui = TuiState::new();
        tui.scroll.set_offset(ratatui::layout::Position::new(0, 12));
        route(&mut store, &mut tui, &[TuiEvent::SelectTab(Tab::Home)]);
        assert_eq!(tui.scroll.offset().y, 12);
        route(&mut store, &mut tui, &[TuiEvent::SelectTab(Tab::About)]);
        assert_eq!(tui.scroll.offset().y, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn send_effect_reports_back_over_channel() {
        let provider = Arc::new(RecordingProvider::answering(vec![]));
        let services = services(provider.clone());
        let (tx, rx) = mpsc::channel();
        let mut store = test_store();

        let quit = execute(
            Effect::SendContact {
                id: "contact-test".into(),
                draft: valid_draft(),
            },
            &mut store,
            &services,
            &tx,
        );
        assert!(!quit);

        let action = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(action, Action::SubmissionFinished(Ok(())));
        let templates: Vec<String> = provider.calls().into_iter().map(|(t, _)| t).collect();
        assert_eq!(templates, vec!["template_owner", "template_reply"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn booking_effect_reports_back_over_channel() {
        let provider = Arc::new(RecordingProvider::answering(vec![]));
        let services = services(provider.clone());
        let (tx, rx) = mpsc::channel();
        let mut store = test_store();

        let quit = execute(
            Effect::SendBooking {
                id: "booking-test".into(),
                request: BookingRequest {
                    name: "Sam".into(),
                    email: "sam@example.com".into(),
                    service: SERVICES[0].name.to_string(),
                    day: None,
                },
            },
            &mut store,
            &services,
            &tx,
        );
        assert!(!quit);

        let action = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(action, Action::BookingFinished(Ok(())));
        let calls = provider.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1.title, "New booking request from Sam");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_effect_delivers_slots_for_that_service() {
        let services = services(Arc::new(RecordingProvider::answering(vec![])));
        let (tx, rx) = mpsc::channel();
        let mut store = test_store();

        execute(Effect::FetchSlots(2), &mut store, &services, &tx);
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Action::SlotsLoaded { service, slots } => {
                assert_eq!(service, 2);
                assert!(!slots.is_empty());
            }
            other => panic!("expected SlotsLoaded, got {other:?}"),
        }
    }

    #[test]
    fn quit_effect_stops_loop() {
        let services = services(Arc::new(RecordingProvider::answering(vec![])));
        let (tx, _rx) = mpsc::channel();
        let mut store = test_store();
        assert!(execute(Effect::Quit, &mut store, &services, &tx));
        assert!(!execute(Effect::None, &mut store, &services, &tx));
    }
}
