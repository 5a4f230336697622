//! The time grid: conversion between wall-clock instants and integer slots.
//!
//! One slot is five minutes. Everything downstream (variables, constraints,
//! the objective) works in slot units; only the domain loader and the result
//! projector touch [`DateTime`] directly.

use chrono::{DateTime, Duration, Utc};

/// Slot granularity, in minutes.
pub const SLOT_MINUTES: i64 = 5;

/// Number of whole slots spanned by `[start, end)`, rounded up.
///
/// Ceiling-biased so that a talk never gets scheduled straddling an
/// unavailable boundary: a 17-minute talk needs 4 slots, not 3.
pub fn num_slots(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let minutes = (end - start).num_seconds() as f64 / 60.0;
    (minutes / SLOT_MINUTES as f64).ceil() as i64
}

/// The slot index of `instant` relative to `event_start`, rounded up.
pub fn slot_offset(event_start: DateTime<Utc>, instant: DateTime<Utc>) -> i64 {
    let minutes = (instant - event_start).num_seconds() as f64 / 60.0;
    (minutes / SLOT_MINUTES as f64).ceil() as i64
}

/// The half-open range of slots a `[range_start, range_end)` window permits,
/// with `spacing` additional slots appended to the end (room for a
/// mandated buffer after the window's nominal close).
pub fn calculate_slots(
    event_start: DateTime<Utc>,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    spacing: i64,
) -> Vec<i64> {
    let slot_start = slot_offset(event_start, range_start);
    let span = num_slots(range_start, range_end) + spacing;
    (slot_start..slot_start + span).collect()
}

/// Maps a slot back onto the wall clock.
pub fn slot_to_time(event_start: DateTime<Utc>, slot: i64) -> DateTime<Utc> {
    event_start + Duration::minutes(SLOT_MINUTES * slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 27, h, m, 0).unwrap()
    }

    #[test]
    fn num_slots_rounds_up() {
        assert_eq!(num_slots(t(9, 0), t(9, 17)), 4);
        assert_eq!(num_slots(t(9, 0), t(9, 20)), 4);
        assert_eq!(num_slots(t(9, 0), t(9, 21)), 5);
    }

    #[test]
    fn slot_offset_rounds_up_from_event_start() {
        let start = t(9, 0);
        assert_eq!(slot_offset(start, t(9, 0)), 0);
        assert_eq!(slot_offset(start, t(9, 4)), 1);
        assert_eq!(slot_offset(start, t(9, 5)), 1);
    }

    #[test]
    fn calculate_slots_is_half_open_with_spacing() {
        let start = t(9, 0);
        let slots = calculate_slots(start, t(9, 0), t(9, 30), 2);
        assert_eq!(slots, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn slot_to_time_round_trips() {
        let start = t(9, 0);
        assert_eq!(slot_to_time(start, 12), t(10, 0));
    }
}
