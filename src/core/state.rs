//! # Application State
//!
//! Everything the site shell needs to know about itself, in one struct.
//! No terminal types here. Focus, cursor and scroll live in the `tui` module.
//!
//! ```text
//! AppState
//! ├── active_tab: Tab                  // page currently shown
//! ├── mobile_menu_open: bool           // collapsed nav overlay
//! ├── contact_draft: ContactDraft      // unsent contact form values
//! ├── form_errors: Vec<String>         // last validation result
//! ├── loading: bool                    // submission in flight
//! ├── error: Option<String>            // last submission failure
//! ├── notification: Option<Notification>
//! ├── submission_id: Option<String>    // id of the in-flight submission
//! └── booking: BookingState            // booking modal, its step and details
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::NaiveDate;

use crate::core::booking::TimeSlot;

/// Top-level page sections, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::About, Tab::Services, Tab::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::About => "About",
            Tab::Services => "Services",
            Tab::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::About => 1,
            Tab::Services => 2,
            Tab::Contact => 3,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// In-progress contact form values. Fields are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

/// Partial update for [`ContactDraft`]. `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub message: Option<String>,
}

impl ContactDraft {
    pub fn merge(&mut self, patch: DraftPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Dismissible message shown over the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

/// Where the visitor is inside the booking modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStep {
    /// Picking a service and looking at times.
    #[default]
    Choose,
    /// Entering a name and email before the request is sent.
    Details,
}

/// Who is booking. Fields are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
}

/// A sanitized booking request, ready for the mail provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub service: String,
    /// Day the visitor was looking at, if availability had loaded.
    pub day: Option<NaiveDate>,
}

/// Booking modal state. `selected` indexes into `content::SERVICES`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingState {
    pub open: bool,
    pub selected: usize,
    pub slots: Vec<TimeSlot>,
    pub slots_loading: bool,
    pub step: BookingStep,
    pub details: BookingDetails,
    /// Last validation result for `details`.
    pub errors: Vec<String>,
    /// Booking request in flight.
    pub sending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub active_tab: Tab,
    pub mobile_menu_open: bool,
    pub contact_draft: ContactDraft,
    pub form_errors: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub notification: Option<Notification>,
    pub submission_id: Option<String>,
    pub booking: BookingState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.active_tab, Tab::Home);
        assert!(!state.mobile_menu_open);
        assert_eq!(state.contact_draft, ContactDraft::default());
        assert!(state.contact_draft.name.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(!state.booking.open);
    }

    #[test]
    fn test_tab_cycles_both_ways() {
        assert_eq!(Tab::Home.next(), Tab::About);
        assert_eq!(Tab::Contact.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Contact);
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
            assert_eq!(Tab::ALL[tab.index()], tab);
        }
    }

    #[test]
    fn test_merge_touches_only_given_fields() {
        let mut draft = ContactDraft {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone_number: "555".into(),
            message: "Hi".into(),
        };
        draft.merge(DraftPatch {
            email: Some("new@example.com".into()),
            ..Default::default()
        });
        assert_eq!(draft.name, "Sam");
        assert_eq!(draft.email, "new@example.com");
        assert_eq!(draft.phone_number, "555");
        assert_eq!(draft.message, "Hi");
    }
}
