//! # Core Site Logic
//!
//! Everything the barbershop site knows, independent of how it is drawn.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • content (copy, data) │
//!                    │  • state + action       │
//!                    │  • store (dispatch)     │
//!                    │  • validation, seo      │
//!                    │                         │
//!                    │  No terminal. No HTTP.  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    mail    │      │ --print-   │
//!     │  Adapter   │      │  (EmailJS) │      │   head     │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `AppState` and the draft/notification types
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`store`]: owns the state, hands out read-only scopes
//! - [`content`]: services, hours, team and testimonials
//! - [`booking`]: availability lookup and the external booking page
//! - [`seo`]: document head and JSON-LD

pub mod action;
pub mod booking;
pub mod config;
pub mod content;
pub mod format;
pub mod seo;
pub mod state;
pub mod store;
pub mod validation;
