//! # Booking Modal
//!
//! Overlay opened with Ctrl+B or the "Book Now" buttons. Pick a service on
//! the left and see the next open day's times on the right. Enter moves to
//! a name and email step; Enter again sends the booking request and, once it
//! is delivered, hands off to the hosted booking calendar.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookingModalState` (list highlight, detail fields) lives in `TuiState`
//! - `BookingModal` is created each frame with borrowed state and the
//!   site's `BookingState`
//!
//! The highlight and the fields edit locally; the parent turns the events
//! into actions so availability is fetched and details are validated.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::core::content::{self, SERVICES};
use crate::core::format::{format_duration, format_price};
use crate::core::state::{BookingDetails, BookingState, BookingStep};
use crate::core::validation::{EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::loading::{Skeleton, Spinner};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::components::modal::Modal;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const SLOTS_PER_ROW: usize = 4;

pub struct BookingModalState {
    pub list_state: ListState,
    step: BookingStep,
    name: TextField,
    email: TextField,
    /// Details step: `true` when the email field has focus.
    email_focused: bool,
}

impl BookingModalState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            step: BookingStep::Choose,
            name: TextField::new("Name").required(),
            email: TextField::new("Email").required(),
            email_focused: false,
        }
    }

    /// Follow the site state: highlighted service, current step, field values
    /// and validation messages.
    pub fn sync(&mut self, booking: &BookingState) {
        if self.list_state.selected() != Some(booking.selected) {
            self.list_state.select(Some(booking.selected));
        }
        if self.step != booking.step {
            self.step = booking.step;
            self.email_focused = false;
        }
        self.name.set_value(&booking.details.name);
        self.email.set_value(&booking.details.email);

        let error_for = |messages: &[&str]| {
            messages
                .iter()
                .find(|m| booking.errors.iter().any(|e| e == *m))
                .map(|m| m.to_string())
        };
        self.name.error = error_for(&[NAME_REQUIRED]);
        self.email.error = error_for(&[EMAIL_REQUIRED, EMAIL_INVALID]);
        self.name.focused = !self.email_focused;
        self.email.focused = self.email_focused;
    }

    fn details(&self) -> BookingDetails {
        BookingDetails {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
        }
    }

    fn toggle_focus(&mut self) {
        self.email_focused = !self.email_focused;
        self.name.focused = !self.email_focused;
        self.email.focused = self.email_focused;
    }

    fn handle_details_event(&mut self, event: &TuiEvent) -> Option<BookingEvent> {
        match event {
            TuiEvent::Escape => Some(BookingEvent::Back),
            TuiEvent::FocusNext
            | TuiEvent::FocusPrev
            | TuiEvent::CursorUp
            | TuiEvent::CursorDown => {
                self.toggle_focus();
                None
            }
            _ => {
                let field = if self.email_focused {
                    &mut self.email
                } else {
                    &mut self.name
                };
                match field.handle_event(event)? {
                    FieldEvent::Changed(_) => Some(BookingEvent::EditDetails(self.details())),
                    // Enter on the name moves on; on the email it sends
                    FieldEvent::Submit if !self.email_focused => {
                        self.toggle_focus();
                        None
                    }
                    FieldEvent::Submit => Some(BookingEvent::Confirm),
                }
            }
        }
    }

    fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}

impl Default for BookingModalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the booking modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    SelectService(usize),
    Confirm,
    Dismiss,
    EditDetails(BookingDetails),
    Back,
}

impl EventHandler for BookingModalState {
    type Event = BookingEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BookingEvent> {
        if self.step == BookingStep::Details {
            return self.handle_details_event(event);
        }
        let current = self.selected();
        let target = match event {
            TuiEvent::Escape => return Some(BookingEvent::Dismiss),
            TuiEvent::Submit => return Some(BookingEvent::Confirm),
            TuiEvent::CursorUp | TuiEvent::FocusPrev => current.saturating_sub(1),
            TuiEvent::CursorDown | TuiEvent::FocusNext => {
                (current + 1).min(SERVICES.len().saturating_sub(1))
            }
            _ => return None,
        };
        if target == current {
            return None;
        }
        self.list_state.select(Some(target));
        Some(BookingEvent::SelectService(target))
    }
}

/// Transient render wrapper for the booking overlay.
pub struct BookingModal<'a> {
    state: &'a mut BookingModalState,
    booking: &'a BookingState,
    compact: bool,
    frame_index: usize,
}

impl<'a> BookingModal<'a> {
    pub fn new(
        state: &'a mut BookingModalState,
        booking: &'a BookingState,
        compact: bool,
        frame_index: usize,
    ) -> Self {
        Self {
            state,
            booking,
            compact,
            frame_index,
        }
    }

    fn service_items(&self) -> Vec<ListItem<'static>> {
        let selected = self.state.selected();
        SERVICES
            .iter()
            .enumerate()
            .map(|(i, service)| {
                let style = if i == selected {
                    theme::selected()
                } else {
                    theme::accent()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(service.name, style),
                    Span::styled(
                        format!(
                            "  {} · {}",
                            format_price(service.price_cents),
                            format_duration(service.duration_minutes)
                        ),
                        theme::muted(),
                    ),
                ]))
            })
            .collect()
    }

    fn slot_lines(&self) -> Vec<Line<'static>> {
        let Some(first) = self.booking.slots.first() else {
            return vec![Line::styled("No times available on the next open day.", theme::muted())];
        };
        let mut lines = vec![
            Line::styled(
                first.date.format("%A, %B %-d").to_string(),
                theme::accent().add_modifier(Modifier::BOLD),
            ),
            Line::default(),
        ];
        for row in self.booking.slots.chunks(SLOTS_PER_ROW) {
            let spans: Vec<Span> = row
                .iter()
                .map(|slot| {
                    let style = if slot.available {
                        theme::success()
                    } else {
                        theme::muted().add_modifier(Modifier::CROSSED_OUT)
                    };
                    Span::styled(format!("{:>9} ", slot.label()), style)
                })
                .collect();
            lines.push(Line::from(spans));
        }
        let open = self.booking.slots.iter().filter(|s| s.available).count();
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("{open} open times. Enter to request one."),
            theme::muted(),
        ));
        lines
    }

    fn render_details(&mut self, frame: &mut Frame, area: Rect) {
        let [name_area, email_area, _, status_area] = Layout::vertical([
            Constraint::Length(self.state.name.height(1)),
            Constraint::Length(self.state.email.height(1)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        self.state.name.render(frame, name_area);
        self.state.email.render(frame, email_area);

        let status = if self.booking.sending {
            Spinner {
                label: "Sending your booking request...",
                frame_index: self.frame_index,
            }
            .line()
        } else {
            Line::styled(
                "Enter sends your request, then opens the booking calendar.",
                theme::muted(),
            )
        };
        frame.render_widget(
            Paragraph::new(status).wrap(Wrap { trim: false }),
            status_area,
        );
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let size = if self.compact { (100, 90) } else { (80, 70) };
        let help = match self.booking.step {
            BookingStep::Choose => "↑↓ Service  Enter Book  Esc Close",
            BookingStep::Details => "Tab Field  Enter Send  Esc Back",
        };
        let inner = Modal::new("Book an Appointment", help)
            .size(size.0, size.1)
            .render(frame, area);

        let [list_area, slots_area] = if self.compact {
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(inner)
        } else {
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(inner)
        };

        let list = List::new(self.service_items()).block(
            Block::default()
                .borders(if self.compact { Borders::BOTTOM } else { Borders::RIGHT })
                .border_style(theme::muted()),
        );
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);

        let service = &SERVICES[self.booking.selected.min(SERVICES.len() - 1)];
        let [heading_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(slots_area.inner(
                ratatui::layout::Margin {
                    horizontal: 1,
                    vertical: 0,
                },
            ));
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(service.name, theme::accent().add_modifier(Modifier::BOLD)),
                Line::styled(service.description, theme::muted()),
            ]),
            heading_area,
        );

        if self.booking.step == BookingStep::Details {
            self.render_details(frame, body_area);
        } else if self.booking.slots_loading {
            Skeleton {
                rows: 4,
                frame_index: self.frame_index,
            }
            .render(frame, body_area);
        } else {
            frame.render_widget(
                Paragraph::new(self.slot_lines()).wrap(Wrap { trim: false }),
                body_area,
            );
        }
    }
}

/// Footer hint text while the modal is open.
pub fn booking_hint() -> String {
    format!("Booking opens {}", content::BOOKING_URL)
}
