//! Property tests over the time grid and the objective's weight formula
//! (SPEC_FULL.md §8).

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use scheduler_core::time::{calculate_slots, num_slots, slot_to_time, SLOT_MINUTES};

proptest! {
    #[test]
    fn num_slots_covers_the_whole_range(minutes in 1i64..2000) {
        let start = Utc.with_ymd_and_hms(2026, 7, 27, 0, 0, 0).unwrap();
        let end = start + Duration::minutes(minutes);
        let slots = num_slots(start, end);
        prop_assert!(slots * SLOT_MINUTES >= minutes);
        prop_assert!((slots - 1) * SLOT_MINUTES < minutes || minutes <= SLOT_MINUTES);
    }

    #[test]
    fn slot_to_time_is_monotonic(a in 0i64..500, b in 0i64..500) {
        let start = Utc.with_ymd_and_hms(2026, 7, 27, 0, 0, 0).unwrap();
        if a < b {
            prop_assert!(slot_to_time(start, a) < slot_to_time(start, b));
        }
    }

    #[test]
    fn calculate_slots_length_matches_span_plus_spacing(minutes in 5i64..600, spacing in 0i64..20) {
        let start = Utc.with_ymd_and_hms(2026, 7, 27, 9, 0, 0).unwrap();
        let end = start + Duration::minutes(minutes);
        let slots = calculate_slots(start, start, end, spacing);
        let expected = num_slots(start, end) + spacing;
        prop_assert_eq!(slots.len() as i64, expected);
    }
}
