//! Display helpers: prices, durations, ids, label joining, and a debouncer.
//!
//! All one-way. Nothing here parses its own output back.

use std::time::{Duration, Instant};

/// `3000` → `"$30"`, `8550` → `"$85.50"`.
pub fn format_price(cents: u32) -> String {
    let dollars = cents / 100;
    let rest = cents % 100;
    if rest == 0 {
        format!("${dollars}")
    } else {
        format!("${dollars}.{rest:02}")
    }
}

/// `45` → `"45min"`, `60` → `"1h"`, `90` → `"1h 30min"`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{m}min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}min"),
    }
}

/// `13` → `"1:00 PM"`. Whole hours only.
pub fn format_hour(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12}:00 {suffix}")
}

/// Opening range for the hours table, `"Closed"` when `None`.
pub fn format_hours(open: Option<(u32, u32)>) -> String {
    match open {
        Some((from, to)) => format!("{} - {}", format_hour(from), format_hour(to)),
        None => "Closed".to_string(),
    }
}

/// Short unique id with a readable prefix, e.g. `contact-1b4e28ba`.
pub fn generate_id(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &uuid[..8])
}

/// Joins the labels whose flag is set, space separated. Empty labels are skipped.
pub fn join_labels(parts: &[(&str, bool)]) -> String {
    parts
        .iter()
        .filter(|(label, on)| *on && !label.is_empty())
        .map(|(label, _)| *label)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trailing-edge debouncer driven by the event loop's clock.
///
/// `touch()` on every input; `fire()` returns true once the input has been
/// quiet for `delay`, then disarms until the next `touch()`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_touch: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_touch: None,
        }
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_touch = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_touch.is_some()
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.last_touch {
            Some(t) if now.duration_since(t) >= self.delay => {
                self.last_touch = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_golden_values() {
        assert_eq!(format_duration(90), "1h 30min");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(45), "45min");
        assert_eq!(format_duration(150), "2h 30min");
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(3000), "$30");
        assert_eq!(format_price(8550), "$85.50");
        assert_eq!(format_price(5), "$0.05");
    }

    #[test]
    fn hours_formatting() {
        assert_eq!(format_hour(9), "9:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(0), "12:00 AM");
        assert_eq!(format_hours(Some((9, 19))), "9:00 AM - 7:00 PM");
        assert_eq!(format_hours(None), "Closed");
    }

    #[test]
    fn generated_ids_are_prefixed_and_distinct() {
        let a = generate_id("contact");
        let b = generate_id("contact");
        assert!(a.starts_with("contact-"));
        assert_eq!(a.len(), "contact-".len() + 8);
        assert_ne!(a, b);
    }

    #[test]
    fn join_labels_skips_unset() {
        assert_eq!(
            join_labels(&[("sending", true), ("menu", false), ("error", true)]),
            "sending error"
        );
        assert_eq!(join_labels(&[("", true)]), "");
    }

    #[test]
    fn debouncer_fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        assert!(!d.fire(start));

        d.touch(start);
        assert!(d.is_pending());
        assert!(!d.fire(start + Duration::from_millis(100)));

        // A new keystroke restarts the window
        d.touch(start + Duration::from_millis(200));
        assert!(!d.fire(start + Duration::from_millis(400)));
        assert!(d.fire(start + Duration::from_millis(500)));
        assert!(!d.fire(start + Duration::from_millis(900)));
    }
}
