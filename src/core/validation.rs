//! # Validation
//!
//! Contact form checks and input sanitization.
//!
//! Nothing here fails. Bad input produces a message in the returned list
//! (or an emptied string from [`sanitize_string`]), never an error value the
//! caller has to unwrap.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::state::{BookingDetails, ContactDraft};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script pattern compiles")
});

/// Ordered list of problems with the draft. Empty means the form can be sent.
///
/// Rule order is fixed: name, email, message, then phone (only when one
/// was typed, phone is optional).
pub fn validate_contact_form(draft: &ContactDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(NAME_REQUIRED.to_string());
    }

    if draft.email.trim().is_empty() {
        errors.push(EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(draft.email.trim()) {
        errors.push(EMAIL_INVALID.to_string());
    }

    if draft.message.trim().is_empty() {
        errors.push(MESSAGE_REQUIRED.to_string());
    }

    let phone = draft.phone_number.trim();
    if !phone.is_empty() && !is_valid_phone_number(phone) {
        errors.push(PHONE_INVALID.to_string());
    }

    errors
}

/// Name, then email. Same messages as the contact form.
pub fn validate_booking_details(details: &BookingDetails) -> Vec<String> {
    let mut errors = Vec::new();
    if details.name.trim().is_empty() {
        errors.push(NAME_REQUIRED.to_string());
    }
    if details.email.trim().is_empty() {
        errors.push(EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(details.email.trim()) {
        errors.push(EMAIL_INVALID.to_string());
    }
    errors
}

pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.contains("..") {
        return false;
    }
    EMAIL_RE.is_match(value)
}

/// Accepts 7 to 15 digits once spaces, `-`, `(`, `)`, `.` and `+` are removed.
pub fn is_valid_phone_number(value: &str) -> bool {
    let digits: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.' | '+'))
        .collect();
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Trims, drops `<script>` blocks, then escapes markup characters.
///
/// Applied to every user-supplied field before it is displayed or sent to
/// the mail provider.
pub fn sanitize_string(value: &str) -> String {
    let stripped = SCRIPT_RE.replace_all(value.trim(), "");
    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Sanitized copy of every draft field.
pub fn sanitize_draft(draft: &ContactDraft) -> ContactDraft {
    ContactDraft {
        name: sanitize_string(&draft.name),
        email: sanitize_string(&draft.email),
        phone_number: sanitize_string(&draft.phone_number),
        message: sanitize_string(&draft.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, phone: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn email_golden_values() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("user..double.dot@example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example"));
    }

    #[test]
    fn phone_golden_values() {
        assert!(is_valid_phone_number("555-123-4567"));
        assert!(is_valid_phone_number("(555) 123-4567"));
        assert!(is_valid_phone_number("+1 555.123.4567"));
        assert!(!is_valid_phone_number("abc-def-ghij"));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("1234567890123456"));
    }

    #[test]
    fn sanitize_strips_script_blocks() {
        assert_eq!(sanitize_string("<script>alert(1)</script>Hello"), "Hello");
        assert_eq!(
            sanitize_string("a<SCRIPT type=\"x\">\nbad()\n</Script>b"),
            "ab"
        );
    }

    #[test]
    fn sanitize_escapes_markup() {
        let out = sanitize_string("<div>Content</div>");
        assert_eq!(out, "&lt;div&gt;Content&lt;&#x2F;div&gt;");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('/'));
    }

    #[test]
    fn sanitize_escapes_every_special_character() {
        assert_eq!(
            sanitize_string("& \" ' ` ="),
            "&amp; &quot; &#x27; &#x60; &#x3D;"
        );
    }

    #[test]
    fn sanitize_trims_and_tolerates_empty() {
        assert_eq!(sanitize_string("   hi  "), "hi");
        assert_eq!(sanitize_string("   "), "");
        assert_eq!(sanitize_string("<script>only</script>"), "");
    }

    #[test]
    fn empty_form_reports_three_errors_in_order() {
        let errors = validate_contact_form(&ContactDraft::default());
        assert_eq!(errors, vec![NAME_REQUIRED, EMAIL_REQUIRED, MESSAGE_REQUIRED]);
    }

    #[test]
    fn invalid_email_and_phone_reported() {
        let errors = validate_contact_form(&draft("Sam", "nope", "12", "Hi"));
        assert_eq!(errors, vec![EMAIL_INVALID, PHONE_INVALID]);
    }

    #[test]
    fn well_formed_form_is_valid() {
        let errors = validate_contact_form(&draft(
            "Sam",
            "sam@example.com",
            "",
            "Do you take walk-ins?",
        ));
        assert!(errors.is_empty());
    }

    #[test]
    fn sanitize_draft_covers_all_fields() {
        let clean = sanitize_draft(&draft(" <b> ", "a@b.co", " 555 ", "x=y"));
        assert_eq!(clean.name, "&lt;b&gt;");
        assert_eq!(clean.email, "a@b.co");
        assert_eq!(clean.phone_number, "555");
        assert_eq!(clean.message, "x&#x3D;y");
    }

    #[test]
    fn booking_details_need_name_and_valid_email() {
        let empty = BookingDetails::default();
        assert_eq!(
            validate_booking_details(&empty),
            vec![NAME_REQUIRED.to_string(), EMAIL_REQUIRED.to_string()]
        );
        let bad_email = BookingDetails {
            name: "Sam".into(),
            email: "sam@".into(),
        };
        assert_eq!(validate_booking_details(&bad_email), vec![EMAIL_INVALID.to_string()]);
        let ok = BookingDetails {
            name: "Sam".into(),
            email: "sam@example.com".into(),
        };
        assert!(validate_booking_details(&ok).is_empty());
    }
}
