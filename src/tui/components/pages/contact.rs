//! # Contact Page
//!
//! Shop details on the left, the contact form on the right (stacked on
//! compact terminals, details dropped).
//!
//! ## Focus
//!
//! Tab / Shift+Tab cycle Name → Email → Phone → Message → Send. Enter in a
//! single-line field moves on; Enter on Send submits. The message field takes
//! Enter as a newline.
//!
//! Field contents mirror `AppState::contact_draft`. Edits leave here as
//! `ContactFormEvent::Edit` patches; `sync` copies the draft back in so a
//! reset after a successful send clears the fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::content::CONTACT;
use crate::core::state::{AppState, ContactDraft, DraftPatch};
use crate::core::validation::{
    EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, NAME_REQUIRED, PHONE_INVALID,
};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::components::loading::Spinner;
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const MESSAGE_ROWS: u16 = 5;
const DETAILS_WIDTH: u16 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Email,
    Phone,
    Message,
    Send,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Name,
        FormFocus::Email,
        FormFocus::Phone,
        FormFocus::Message,
        FormFocus::Send,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Validation messages that belong to this field.
    fn messages(self) -> &'static [&'static str] {
        match self {
            FormFocus::Name => &[NAME_REQUIRED],
            FormFocus::Email => &[EMAIL_REQUIRED, EMAIL_INVALID],
            FormFocus::Phone => &[PHONE_INVALID],
            FormFocus::Message => &[MESSAGE_REQUIRED],
            FormFocus::Send => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormEvent {
    Edit(DraftPatch),
    Submit,
}

pub struct ContactFormState {
    pub focus: FormFocus,
    name: TextField,
    email: TextField,
    phone: TextField,
    message: TextField,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            focus: FormFocus::Name,
            name: TextField::new("Name").required(),
            email: TextField::new("Email").required(),
            phone: TextField::new("Phone (optional)"),
            message: TextField::new("Message").required().multiline(),
        }
    }

    /// Copy the draft into the fields.
    pub fn sync(&mut self, draft: &ContactDraft) {
        self.name.set_value(&draft.name);
        self.email.set_value(&draft.email);
        self.phone.set_value(&draft.phone_number);
        self.message.set_value(&draft.message);
    }

    fn field_mut(&mut self, focus: FormFocus) -> Option<&mut TextField> {
        match focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Phone => Some(&mut self.phone),
            FormFocus::Message => Some(&mut self.message),
            FormFocus::Send => None,
        }
    }

    fn patch(focus: FormFocus, value: String) -> DraftPatch {
        let mut patch = DraftPatch::default();
        match focus {
            FormFocus::Name => patch.name = Some(value),
            FormFocus::Email => patch.email = Some(value),
            FormFocus::Phone => patch.phone_number = Some(value),
            FormFocus::Message => patch.message = Some(value),
            FormFocus::Send => {}
        }
        patch
    }

    /// Push focus and errors into the fields before drawing.
    fn apply_props(&mut self, errors: &[String]) {
        let focus = self.focus;
        for f in FormFocus::ORDER {
            let error = f
                .messages()
                .iter()
                .find(|m| errors.iter().any(|e| e == *m))
                .map(|m| m.to_string());
            if let Some(field) = self.field_mut(f) {
                field.focused = f == focus;
                field.error = error;
            }
        }
    }
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ContactFormState {
    type Event = ContactFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ContactFormEvent> {
        match event {
            TuiEvent::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::FocusPrev => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::Submit if self.focus == FormFocus::Send => Some(ContactFormEvent::Submit),
            // Arrow keys leave single-line fields
            TuiEvent::CursorDown if !matches!(self.focus, FormFocus::Message) => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::CursorUp if !matches!(self.focus, FormFocus::Message) => {
                self.focus = self.focus.prev();
                None
            }
            _ => {
                let focus = self.focus;
                match self.field_mut(focus)?.handle_event(event)? {
                    FieldEvent::Changed(value) => {
                        Some(ContactFormEvent::Edit(Self::patch(focus, value)))
                    }
                    FieldEvent::Submit => {
                        self.focus = focus.next();
                        None
                    }
                }
            }
        }
    }
}

pub struct ContactPage<'a> {
    pub form: &'a mut ContactFormState,
    pub state: &'a AppState,
    pub compact: bool,
    pub frame_index: usize,
}

impl ContactPage<'_> {
    fn details(&self) -> Paragraph<'static> {
        let label = |text: &'static str| Span::styled(text, theme::muted());
        let lines = vec![
            Line::from(label("Call")),
            Line::styled(CONTACT.phone, theme::accent().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::from(label("Email")),
            Line::styled(CONTACT.email, theme::accent()),
            Line::default(),
            Line::from(label("Visit")),
            Line::raw(CONTACT.street),
            Line::raw(format!(
                "{}, {} {}",
                CONTACT.city, CONTACT.region, CONTACT.postal_code
            )),
            Line::default(),
            Line::from(label("Follow")),
            Line::styled(CONTACT.instagram, theme::link()),
        ];
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme::muted())
                    .title(Line::styled(" Get in Touch ", theme::accent())),
            )
            .wrap(Wrap { trim: true })
    }

    fn status_line(&self) -> Line<'static> {
        if self.state.loading {
            return Spinner {
                label: "Sending your message...",
                frame_index: self.frame_index,
            }
            .line();
        }
        if let Some(error) = &self.state.error {
            return Line::styled(error.clone(), theme::failure());
        }
        match self.state.form_errors.len() {
            0 => Line::styled("We usually reply within a day.", theme::muted()),
            1 => Line::styled("Please fix the highlighted field.", theme::failure()),
            n => Line::styled(format!("Please fix the {n} highlighted fields."), theme::failure()),
        }
    }

    fn render_form(&mut self, frame: &mut Frame, area: Rect) {
        self.form.apply_props(&self.state.form_errors);

        let [name_area, email_area, phone_area, message_area, button_area, status_area] =
            Layout::vertical([
                Constraint::Length(self.form.name.height(1)),
                Constraint::Length(self.form.email.height(1)),
                Constraint::Length(self.form.phone.height(1)),
                Constraint::Length(self.form.message.height(MESSAGE_ROWS)),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .areas(area);

        // Only the focused field places the terminal cursor
        self.form.name.render(frame, name_area);
        self.form.email.render(frame, email_area);
        self.form.phone.render(frame, phone_area);
        self.form.message.render(frame, message_area);

        let label = if self.state.loading { "Sending..." } else { "Send Message" };
        Button::new(label)
            .hint("Enter")
            .focused(self.form.focus == FormFocus::Send)
            .disabled(self.state.loading)
            .render(frame, button_area);

        frame.render_widget(
            Paragraph::new(self.status_line()).wrap(Wrap { trim: true }),
            status_area,
        );
    }
}

impl Component for ContactPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.compact {
            self.render_form(frame, area);
            return;
        }
        let [details_area, _, form_area] = Layout::horizontal([
            Constraint::Length(DETAILS_WIDTH),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);
        frame.render_widget(self.details(), details_area);
        self.render_form(frame, form_area);
    }
}
