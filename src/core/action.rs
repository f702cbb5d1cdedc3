//! # Actions
//!
//! Everything that can happen on the site becomes an `Action`.
//! User presses F2? That's `Action::SetActiveTab(Tab::About)`.
//! The mail service answers? That's `Action::SubmissionFinished(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the event loop should start. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use crate::core::booking::TimeSlot;
use crate::core::content::{self, CONTACT};
use crate::core::format::generate_id;
use crate::core::state::{
    AppState, BookingDetails, BookingRequest, BookingStep, ContactDraft, DraftPatch, Notification,
    NotificationKind, Tab,
};
use crate::core::validation::{
    sanitize_draft, sanitize_string, validate_booking_details, validate_contact_form,
};
use crate::mail::SubmissionError;

/// Generic failure text. Provider details are logged, never shown.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "We couldn't send your message. Please try again or give us a call.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetActiveTab(Tab),
    ToggleMobileMenu,
    CloseMobileMenu,
    UpdateContactDraft(DraftPatch),
    ResetContactDraft,
    SetLoading(bool),
    /// Setting an error also clears `loading`.
    SetError(Option<String>),
    /// Re-run validation after an edit, only once a submit attempt has shown errors.
    RevalidateContactForm,
    SubmitContact,
    SubmissionFinished(Result<(), SubmissionError>),
    OpenBooking,
    CloseBooking,
    SelectBookingService(usize),
    SlotsLoaded { service: usize, slots: Vec<TimeSlot> },
    /// From the service list: go to the details step. From the details
    /// step: validate and send the booking request.
    CompleteBooking,
    UpdateBookingDetails(BookingDetails),
    /// Details step back to the service list.
    BookingBack,
    BookingFinished(Result<(), SubmissionError>),
    ShowNotification(Notification),
    DismissNotification,
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Send the sanitized draft. `id` tags the submission in logs.
    SendContact { id: String, draft: ContactDraft },
    /// Load availability for the service at this index of `content::SERVICES`.
    FetchSlots(usize),
    /// Send the booking request. `id` tags it in logs.
    SendBooking { id: String, request: BookingRequest },
    /// Open the external booking calendar.
    OpenBookingPage,
}

pub fn update(state: &mut AppState, action: Action) -> Effect {
    match action {
        Action::SetActiveTab(tab) => {
            state.active_tab = tab;
            state.mobile_menu_open = false;
            Effect::None
        }
        Action::ToggleMobileMenu => {
            state.mobile_menu_open = !state.mobile_menu_open;
            Effect::None
        }
        Action::CloseMobileMenu => {
            state.mobile_menu_open = false;
            Effect::None
        }
        Action::UpdateContactDraft(patch) => {
            state.contact_draft.merge(patch);
            Effect::None
        }
        Action::ResetContactDraft => {
            state.contact_draft = ContactDraft::default();
            state.form_errors.clear();
            Effect::None
        }
        Action::SetLoading(loading) => {
            state.loading = loading;
            Effect::None
        }
        Action::SetError(error) => {
            state.error = error;
            state.loading = false;
            Effect::None
        }
        Action::RevalidateContactForm => {
            if !state.form_errors.is_empty() {
                state.form_errors = validate_contact_form(&state.contact_draft);
            }
            Effect::None
        }
        Action::SubmitContact => {
            if state.loading {
                return Effect::None;
            }
            let errors = validate_contact_form(&state.contact_draft);
            if !errors.is_empty() {
                state.form_errors = errors;
                return Effect::None;
            }
            state.form_errors.clear();
            state.error = None;
            state.loading = true;
            let id = generate_id("contact");
            state.submission_id = Some(id.clone());
            Effect::SendContact {
                id,
                draft: sanitize_draft(&state.contact_draft),
            }
        }
        Action::SubmissionFinished(result) => {
            state.submission_id = None;
            match result {
                Ok(()) => {
                    state.loading = false;
                    state.contact_draft = ContactDraft::default();
                    state.notification = Some(Notification {
                        kind: NotificationKind::Success,
                        title: "Message sent".to_string(),
                        body: "Thanks for reaching out! We'll get back to you shortly."
                            .to_string(),
                    });
                }
                Err(_) => {
                    update(
                        state,
                        Action::SetError(Some(SUBMISSION_FAILED_MESSAGE.to_string())),
                    );
                    state.notification = Some(Notification {
                        kind: NotificationKind::Failure,
                        title: "Message not sent".to_string(),
                        body: format!("{SUBMISSION_FAILED_MESSAGE} {}", CONTACT.phone),
                    });
                }
            }
            Effect::None
        }
        Action::OpenBooking => {
            state.mobile_menu_open = false;
            state.booking.open = true;
            state.booking.step = BookingStep::Choose;
            state.booking.errors.clear();
            state.booking.slots.clear();
            state.booking.slots_loading = true;
            Effect::FetchSlots(state.booking.selected)
        }
        Action::CloseBooking => {
            state.booking.open = false;
            state.booking.slots_loading = false;
            Effect::None
        }
        Action::SelectBookingService(index) => {
            let index = index.min(content::SERVICES.len().saturating_sub(1));
            if !state.booking.open || index == state.booking.selected {
                return Effect::None;
            }
            state.booking.selected = index;
            state.booking.slots.clear();
            state.booking.slots_loading = true;
            Effect::FetchSlots(index)
        }
        Action::SlotsLoaded { service, slots } => {
            // Ignore answers for a service the user has already moved past
            if state.booking.open && service == state.booking.selected {
                state.booking.slots = slots;
                state.booking.slots_loading = false;
            }
            Effect::None
        }
        Action::CompleteBooking => {
            let booking = &mut state.booking;
            if !booking.open || booking.sending {
                return Effect::None;
            }
            if booking.step == BookingStep::Choose {
                booking.step = BookingStep::Details;
                return Effect::None;
            }
            booking.errors = validate_booking_details(&booking.details);
            if !booking.errors.is_empty() {
                return Effect::None;
            }
            booking.sending = true;
            let service = &content::SERVICES[booking.selected.min(content::SERVICES.len() - 1)];
            Effect::SendBooking {
                id: generate_id("booking"),
                request: BookingRequest {
                    name: sanitize_string(&booking.details.name),
                    email: sanitize_string(&booking.details.email),
                    service: service.name.to_string(),
                    day: booking.slots.first().map(|slot| slot.date),
                },
            }
        }
        Action::UpdateBookingDetails(details) => {
            let booking = &mut state.booking;
            booking.details = details;
            if !booking.errors.is_empty() {
                booking.errors = validate_booking_details(&booking.details);
            }
            Effect::None
        }
        Action::BookingBack => {
            if !state.booking.sending {
                state.booking.step = BookingStep::Choose;
                state.booking.errors.clear();
            }
            Effect::None
        }
        Action::BookingFinished(result) => {
            state.booking.sending = false;
            match result {
                Ok(()) => {
                    state.booking.open = false;
                    state.booking.slots_loading = false;
                    state.booking.step = BookingStep::Choose;
                    state.booking.details = BookingDetails::default();
                    state.notification = Some(Notification {
                        kind: NotificationKind::Success,
                        title: "Booking request sent".to_string(),
                        body: "Pick your exact time on the booking calendar we just opened."
                            .to_string(),
                    });
                    Effect::OpenBookingPage
                }
                Err(_) => {
                    state.notification = Some(Notification {
                        kind: NotificationKind::Failure,
                        title: "Booking not sent".to_string(),
                        body: format!(
                            "We couldn't send your booking request. Please try again or call {}.",
                            CONTACT.phone
                        ),
                    });
                    Effect::None
                }
            }
        }
        Action::ShowNotification(notification) => {
            state.notification = Some(notification);
            Effect::None
        }
        Action::DismissNotification => {
            state.notification = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
