//! Conversions between stored milliseconds and displayed seconds
//!
//! The engine only ever compares integer milliseconds. Seconds with two
//! decimal places exist for display and data entry; converting to them rounds
//! to the nearest 10 ms, half up.

use crate::error::{Result, ScoringError};

/// Round milliseconds to whole hundredths of a second, half up
fn to_centiseconds(ms: i64) -> i64 {
    let magnitude = (ms.unsigned_abs() + 5) / 10;
    let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
    if ms < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Format milliseconds as seconds with two decimals, e.g. `61234` -> `"61.23"`
pub fn format_seconds(ms: i64) -> String {
    let centis = to_centiseconds(ms);
    let sign = if centis < 0 { "-" } else { "" };
    let centis = centis.unsigned_abs();
    format!("{}{}.{:02}", sign, centis / 100, centis % 100)
}

/// Seconds as a float, rounded to two decimals
pub fn ms_to_seconds(ms: i64) -> f64 {
    to_centiseconds(ms) as f64 / 100.0
}

/// Milliseconds from a seconds float, rounded to the nearest 10 ms
pub fn seconds_to_ms(seconds: f64) -> Result<i64> {
    let centis = (seconds * 100.0).round();
    if !centis.is_finite() || centis.abs() >= (i64::MAX / 10) as f64 {
        return Err(ScoringError::InvalidTimeFormat {
            value: seconds.to_string(),
        });
    }
    Ok(centis as i64 * 10)
}

/// Parse a displayed time into milliseconds.
///
/// Accepts `SS`, `SS.x`, `SS.xx` and an optional minutes prefix `M:SS.xx`;
/// with a minutes prefix the seconds must be below 60. Digits past the hundredths round to the nearest 10 ms. No floating point is
/// involved, so `parse_seconds(&format_seconds(ms)) == ms` for any
/// non-negative multiple of 10.
pub fn parse_seconds(value: &str) -> Result<i64> {
    let invalid = || ScoringError::InvalidTimeFormat {
        value: value.to_string(),
    };

    let trimmed = value.trim();
    let has_minutes = trimmed.contains(':');
    let (minutes, seconds) = match trimmed.split_once(':') {
        Some((minutes, seconds)) => (Some(minutes), seconds),
        None => (None, trimmed),
    };
    let (whole, fraction) = match seconds.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (seconds, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let minutes: i64 = match minutes {
        Some(minutes) if !minutes.is_empty() && all_digits(minutes) => {
            minutes.parse().map_err(|_| invalid())?
        }
        Some(_) => return Err(invalid()),
        None => 0,
    };
    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    if has_minutes && whole >= 60 {
        return Err(invalid());
    }

    let digit = |index: usize| -> i64 {
        fraction
            .as_bytes()
            .get(index)
            .map(|b| i64::from(b - b'0'))
            .unwrap_or(0)
    };
    let hundredths = digit(0) * 10 + digit(1);
    let round_up = if digit(2) >= 5 { 1 } else { 0 };

    minutes
        .checked_mul(60)
        .and_then(|s| s.checked_add(whole))
        .and_then(|s| s.checked_mul(100))
        .and_then(|c| c.checked_add(hundredths + round_up))
        .and_then(|c| c.checked_mul(10))
        .ok_or_else(invalid)
}
