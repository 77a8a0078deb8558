//! Human-readable rendering of ledger entries and results.

use crate::DrinkEntry;
use chrono::{DateTime, TimeDelta, TimeZone};

/// BAC as a percentage with three decimals, e.g. `0.055%`
pub fn format_bac(bac: f64) -> String {
    format!("{:.3}%", bac)
}

/// Time to sober split into whole hours and minutes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoberEstimate {
    pub hours: u64,
    pub minutes: u64,
}

impl SoberEstimate {
    /// Floor the hours and round the remainder to minutes
    ///
    /// A remainder that rounds up to 60 minutes carries into the hours.
    pub fn from_hours(hours: f64) -> Self {
        if !(hours > 0.0) {
            return Self { hours: 0, minutes: 0 };
        }

        let mut whole = hours.floor() as u64;
        let mut minutes = ((hours - hours.floor()) * 60.0).round() as u64;
        if minutes >= 60 {
            whole += 1;
            minutes -= 60;
        }

        Self {
            hours: whole,
            minutes,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

/// Text shown for the time-to-sober estimate
pub fn format_time_to_sober(hours: f64) -> String {
    if hours > 0.0 {
        let estimate = SoberEstimate::from_hours(hours);
        format!(
            "Tiempo estimado para 0.00%: {}h {}min",
            estimate.hours, estimate.minutes
        )
    } else {
        "Estás sobrio (estimado)".to_string()
    }
}

/// One ledger line, e.g. `2x Cerveza (330ml)`
pub fn format_entry(entry: &DrinkEntry) -> String {
    format!("{}x {}", entry.quantity, entry.drink.display_name)
}

/// Wall-clock time at which the BAC reaches zero
///
/// `None` when the instant is beyond what a `DateTime` can represent.
pub fn sober_at<Tz: TimeZone>(
    now: DateTime<Tz>,
    time_to_sober_hours: f64,
) -> Option<DateTime<Tz>> {
    let seconds = (time_to_sober_hours.max(0.0) * 3600.0).round();
    if !seconds.is_finite() || seconds >= i64::MAX as f64 {
        return None;
    }
    let delta = TimeDelta::try_seconds(seconds as i64)?;
    now.checked_add_signed(delta)
}
