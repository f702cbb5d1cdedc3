//! # Mail
//!
//! Outbound email for the contact form and booking requests. The site has no backend, so
//! messages go straight to a hosted email-delivery API (EmailJS).
//!
//! - [`provider`]: the `EmailProvider` seam and its error type
//! - [`emailjs`]: the EmailJS REST implementation
//! - [`submission`]: the two-email contact and booking flows

pub mod emailjs;
pub mod provider;
pub mod submission;

pub use emailjs::{EmailJsConfig, EmailJsProvider};
pub use provider::{EmailError, EmailProvider, EmailRequest, TemplateParams};
pub use submission::{SubmissionError, Templates, submit_booking, submit_contact};
