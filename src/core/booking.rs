//! # Booking
//!
//! Availability preview for the booking modal and the hand-off to the hosted
//! booking calendar. The real calendar lives on the booking platform; the
//! availability shown here is a mocked, deterministic schedule behind an
//! artificial delay.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, NaiveTime};
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::core::content::{self, Service};

/// Slot granularity in minutes.
pub const SLOT_STEP_MINUTES: u32 = 30;
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub available: bool,
}

impl TimeSlot {
    /// `"9:30 AM"`
    pub fn label(&self) -> String {
        self.start.format("%-I:%M %p").to_string()
    }
}

/// First date on or after `from` that the shop is open. Looks one week ahead.
pub fn next_open_day(from: NaiveDate) -> Option<NaiveDate> {
    (0..7)
        .map(|offset| from + ChronoDuration::days(offset))
        .find(|d| content::hours_for(d.weekday().num_days_from_monday()).is_some())
}

/// Every slot start for `date` where `duration_minutes` fits before closing.
///
/// Which slots are taken is derived from the date so the preview is stable
/// between renders.
pub fn slots_for(date: NaiveDate, duration_minutes: u32) -> Vec<TimeSlot> {
    let Some((open, close)) = content::hours_for(date.weekday().num_days_from_monday()) else {
        return Vec::new();
    };

    let first = open * 60;
    let last_start = (close * 60).saturating_sub(duration_minutes);
    (first..=last_start)
        .step_by(SLOT_STEP_MINUTES as usize)
        .enumerate()
        .filter_map(|(i, minute)| {
            let start = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)?;
            let taken = (date.ordinal() as usize + i) % 3 == 0;
            Some(TimeSlot {
                date,
                start,
                available: !taken,
            })
        })
        .collect()
}

#[async_trait]
pub trait AvailabilityService: Send + Sync {
    /// Returns the schedule for `date`. Never fails; an empty list means closed.
    async fn available_slots(&self, date: NaiveDate, service: &Service) -> Vec<TimeSlot>;
}

/// Demo availability backend: deterministic schedule after a fixed delay.
pub struct MockAvailability {
    delay: Duration,
}

impl MockAvailability {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAvailability {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait]
impl AvailabilityService for MockAvailability {
    async fn available_slots(&self, date: NaiveDate, service: &Service) -> Vec<TimeSlot> {
        debug!(
            "Mock availability: date={}, service={}, delay={:?}",
            date, service.id, self.delay
        );
        tokio::time::sleep(self.delay).await;
        slots_for(date, service.duration_minutes)
    }
}

/// Opens `url` with the platform's default handler in a new browser tab.
///
/// Must run inside a tokio runtime: the opener is waited on from a blocking
/// task so it never lingers as a zombie.
pub fn open_url(url: &str) -> io::Result<()> {
    info!("Opening external URL: {}", url);
    let mut command = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(url);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };
    spawn_reaped(&mut command).map(|_| ())
}

/// Starts `command` detached from the terminal's stdio and waits for it on a
/// blocking task.
fn spawn_reaped(command: &mut Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(tokio::task::spawn_blocking(move || {
        let status = child.wait();
        match &status {
            Ok(status) if !status.success() => warn!("URL opener exited with {status}"),
            Ok(_) => {}
            Err(e) => warn!("Could not wait for URL opener: {e}"),
        }
        status
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn minute_of_day(time: NaiveTime) -> u32 {
        time.hour() * 60 + time.minute()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn closed_on_monday() {
        // 2026-10-12 is a Monday
        assert!(slots_for(date(2026, 10, 12), 30).is_empty());
        assert_eq!(next_open_day(date(2026, 10, 12)), Some(date(2026, 10, 13)));
    }

    #[test]
    fn slots_fit_before_closing() {
        // Saturday, 8:00 AM - 5:00 PM
        let slots = slots_for(date(2026, 10, 17), 90);
        let first = slots.first().unwrap();
        let last = slots.last().unwrap();
        assert_eq!(first.label(), "8:00 AM");
        assert_eq!(last.label(), "3:30 PM");
        assert!(minute_of_day(last.start) + 90 <= 17 * 60);
        assert!(slots.windows(2).all(|w| minute_of_day(w[0].start) < minute_of_day(w[1].start)));
    }

    #[test]
    fn schedule_is_stable_and_mixed() {
        let a = slots_for(date(2026, 10, 14), 30);
        let b = slots_for(date(2026, 10, 14), 30);
        assert_eq!(a, b);
        assert!(a.iter().any(|s| s.available));
        assert!(a.iter().any(|s| !s.available));
    }

    #[tokio::test]
    async fn mock_service_returns_schedule() {
        let service = &content::SERVICES[0];
        let mock = MockAvailability::new(Duration::from_millis(1));
        let slots = mock.available_slots(date(2026, 10, 14), service).await;
        assert_eq!(slots, slots_for(date(2026, 10, 14), service.duration_minutes));
    }

    #[test]
    fn mock_service_closed_day_is_empty() {
        let mock = MockAvailability::new(Duration::ZERO);
        let slots = tokio_test::block_on(
            mock.available_slots(date(2026, 10, 12), &content::SERVICES[1]),
        );
        assert!(slots.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn opener_process_is_waited_for() {
        let handle = spawn_reaped(&mut Command::new("true")).unwrap();
        let status = handle.await.unwrap().unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn missing_opener_is_an_error() {
        let result = spawn_reaped(&mut Command::new("barbershop-no-such-opener"));
        assert!(result.is_err());
    }
}
