//! # TUI Components
//!
//! Every visible piece of the site shell.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything as struct fields and draw it:
//! - `NavBar`, `Footer`: the chrome around every page
//! - `Button`, `Card`, `Spinner`, `Skeleton`: building blocks for pages
//! - `NotificationToast`: submission result
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep presentation state between frames and emit high-level events:
//! - `TextField`: one contact form input
//! - `ContactFormState`: focus order and the four fields
//! - `BookingModalState`, `MobileMenuState`: overlay list highlights
//!
//! Overlays use the persistent state + transient wrapper pattern: the state
//! lives in `TuiState`, and a wrapper borrowing it is built each frame.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── nav_bar.rs        (top bar with page tabs)
//! ├── footer.rs         (address, hours, key hints)
//! ├── button.rs
//! ├── card.rs
//! ├── loading.rs        (spinner, skeleton rows)
//! ├── modal.rs          (base overlay, centered_rect)
//! ├── booking_modal.rs
//! ├── mobile_menu.rs
//! ├── notification.rs
//! ├── text_field/       (input with wrapping and cursor)
//! └── pages/            (home, about, services, contact)
//! ```

pub mod booking_modal;
pub mod button;
pub mod card;
pub mod footer;
pub mod loading;
pub mod mobile_menu;
pub mod modal;
pub mod nav_bar;
pub mod notification;
pub mod pages;
pub mod text_field;

pub use booking_modal::{BookingEvent, BookingModal, BookingModalState};
pub use footer::Footer;
pub use mobile_menu::{MobileMenu, MobileMenuEvent, MobileMenuState};
pub use nav_bar::NavBar;
pub use notification::NotificationToast;
pub use pages::{AboutPage, ContactFormEvent, ContactFormState, ContactPage, HomePage, ServicesPage};
