//! Duration formatting helpers
//!
//! Elapsed time is rendered as `<sign><H>h<M>m<S>s`, dropping leading zero
//! units (e.g. "8760h0m0s", "10m15s", "45s", "-744h0m0s"). A zero duration
//! renders as "0s". Sub-second precision never appears in the output.

use crate::clock::{Clock, SystemClock};
use chrono::TimeDelta;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Format a signed number of seconds as a duration string
///
/// # Arguments
/// * `secs` - Elapsed seconds, negative when the end precedes the start
///
/// # Returns
/// * `String` - Duration in `<sign><H>h<M>m<S>s` form
pub fn format_seconds(secs: i64) -> String {
    if secs == 0 {
        return "0s".to_string();
    }

    let sign = if secs < 0 { "-" } else { "" };
    let total = secs.unsigned_abs();
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}

/// Format a chrono duration, truncating any sub-second part toward zero
pub fn format_duration(delta: TimeDelta) -> String {
    format_seconds(delta.num_seconds())
}

/// Render the time elapsed between two Unix timestamps
///
/// The difference `to - from` is truncated toward zero to whole seconds.
/// Non-finite differences saturate (NaN becomes zero).
///
/// # Arguments
/// * `from` - Start instant as Unix seconds
/// * `to` - End instant as Unix seconds
///
/// # Returns
/// * `String` - Duration string, negative when `to` precedes `from`
pub fn to_duration(from: f64, to: f64) -> String {
    // `as` saturates at the i64 bounds and maps NaN to 0
    format_seconds((to - from).trunc() as i64)
}

/// Render the time elapsed from `timestamp` until the clock's current instant
///
/// Timestamps in the future yield a negative duration.
pub fn since<C: Clock + ?Sized>(timestamp: i64, clock: &C) -> String {
    let now = clock.now().timestamp();
    format_seconds(now.saturating_sub(timestamp))
}

/// [`since`] against the system clock
pub fn since_now(timestamp: i64) -> String {
    since(timestamp, &SystemClock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_leading_zero_units() {
        assert_eq!(format_seconds(45), "45s");
        assert_eq!(format_seconds(60), "1m0s");
        assert_eq!(format_seconds(3600), "1h0m0s");
        assert_eq!(format_seconds(3661), "1h1m1s");
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(format_seconds(i64::MIN).starts_with('-'));
        assert!(!format_seconds(i64::MAX).starts_with('-'));
    }

    #[test]
    fn sub_second_parts_are_truncated() {
        assert_eq!(format_duration(TimeDelta::milliseconds(1999)), "1s");
        assert_eq!(format_duration(TimeDelta::milliseconds(-1999)), "-1s");
        assert_eq!(format_duration(TimeDelta::milliseconds(999)), "0s");
    }
}
