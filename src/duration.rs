//! Duration resolution for raw task records.
//!
//! Task stores deliver durations in whatever shape the user typed: plain
//! numbers, zero-padded strings ("0004"), strings with trailing text, nulls,
//! or three-point estimates that disagree with the stored duration. This
//! module collapses all of that into one effective duration per task. It
//! never fails; malformed input degrades to a best-effort value so the
//! presentation layer always has something to render.

use serde::Serialize;

use crate::task::{RawValue, Task};

/// Values above a workday's worth of hours are assumed to be hours and are
/// converted to days. This cannot distinguish a 9-day task from a 9-hour
/// task; it is preserved as-is from the source system for compatibility.
pub const WORKDAY_HOURS: f64 = 8.0;

/// Tasks always take at least one unit of time. Zero-duration tasks would
/// make the forward/backward passes ill-defined.
pub const MIN_DURATION: f64 = 1.0;

/// A three-point estimate is adopted over the stored duration only when the
/// two differ by more than this.
pub const RECONCILE_TOLERANCE: f64 = 1.0;

/// How a task's effective duration was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedDuration {
    /// The duration used for scheduling. Finite and >= [`MIN_DURATION`].
    pub effective: f64,
    /// Cleaned value of the `duration` field.
    pub duration_field: f64,
    pub optimistic: f64,
    pub most_likely: f64,
    pub pessimistic: f64,
    /// Cleaned value of the stored `expected_time` field (informational).
    pub expected: f64,
    /// `(o + 4m + p) / 6`, when the estimate fields were all plausible.
    pub three_point: Option<f64>,
    /// Whether the three-point estimate won over the duration field.
    pub from_estimates: bool,
}

/// Parses a raw field into a number.
///
/// Strings are trimmed and the first digit run (with an optional fractional
/// part) is extracted, which also strips zero-padding; anything without a
/// digit parses as 0. Values above [`WORKDAY_HOURS`] are treated as hours
/// and divided down to days.
pub fn clean_number(value: &RawValue) -> f64 {
    let parsed = match value {
        RawValue::Null => return 0.0,
        RawValue::Number(n) if n.is_finite() => *n,
        RawValue::Number(_) => 0.0,
        RawValue::Text(s) => parse_text(s),
    };

    if parsed > WORKDAY_HOURS {
        parsed / WORKDAY_HOURS
    } else {
        parsed
    }
}

/// Resolves a task's raw fields into one effective duration.
///
/// The three-point estimate `(o + 4m + p) / 6` is considered only when all
/// three estimate fields exceed 1 (values of 0 or 1 are placeholders). It
/// replaces the stored duration only when the two disagree by more than
/// [`RECONCILE_TOLERANCE`]; estimates close to an explicit duration are
/// treated as noise. The result is clamped to [`MIN_DURATION`].
pub fn resolve(task: &Task) -> ResolvedDuration {
    let duration_field = clean_number(&task.duration);
    let optimistic = clean_number(&task.optimistic_time);
    let most_likely = clean_number(&task.most_likely_time);
    let pessimistic = clean_number(&task.pessimistic_time);
    let expected = clean_number(&task.expected_time);

    let mut three_point = None;
    let mut from_estimates = false;
    let mut effective = duration_field;

    if optimistic > 1.0 && most_likely > 1.0 && pessimistic > 1.0 {
        let estimate = (optimistic + 4.0 * most_likely + pessimistic) / 6.0;
        three_point = Some(estimate);
        if (estimate - duration_field).abs() > RECONCILE_TOLERANCE {
            effective = estimate;
            from_estimates = true;
        }
    }

    if effective < MIN_DURATION {
        effective = MIN_DURATION;
    }

    ResolvedDuration {
        effective,
        duration_field,
        optimistic,
        most_likely,
        pessimistic,
        expected,
        three_point,
        from_estimates,
    }
}

fn parse_text(s: &str) -> f64 {
    let trimmed = s.trim();
    let bytes = trimmed.as_bytes();
    let Some(start) = bytes.iter().position(|b| b.is_ascii_digit()) else {
        return 0.0;
    };

    let mut end = start;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    trimmed[start..end].parse::<f64>().unwrap_or(0.0)
}
