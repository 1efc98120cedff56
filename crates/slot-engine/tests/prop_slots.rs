//! Property-based tests for time conversion and slot generation using proptest.
//!
//! These verify invariants that must hold for *any* valid schedule, not just
//! the fixtures in `slots_tests.rs`.

use chrono::NaiveDate;
use proptest::prelude::*;
use slot_engine::appointment::{AppointmentStatus, BookedAppointment};
use slot_engine::schedule::{DaySchedule, WeeklySchedule};
use slot_engine::slots::{available_slots, candidate_slots, is_slot_available, list_available_slots};
use slot_engine::time::{TimeBlock, TimeOfDay, WeekDay};
use slot_engine::validator::{has_overlap, to_minutes, to_time_string};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Any string in the accepted 12-hour pattern, padded or not.
fn arb_time_string() -> impl Strategy<Value = String> {
    (1u8..=12, 0u8..=59, any::<bool>(), any::<bool>()).prop_map(|(h, m, pm, pad)| {
        let period = if pm { "PM" } else { "AM" };
        if pad {
            format!("{:02}:{:02} {}", h, m, period)
        } else {
            format!("{}:{:02} {}", h, m, period)
        }
    })
}

fn arb_duration() -> impl Strategy<Value = u32> {
    prop_oneof![Just(30u32), Just(45), Just(60), Just(90), Just(120), 5u32..=180]
}

/// Up to four non-overlapping blocks, in random order.
///
/// Built by cutting the day at sorted, distinct points and keeping every other
/// span, so blocks may touch but never overlap.
fn arb_blocks() -> impl Strategy<Value = Vec<TimeBlock>> {
    (prop::collection::btree_set(0u32..1440, 2..=8), any::<bool>()).prop_map(|(cuts, reverse)| {
        let cuts: Vec<u32> = cuts.into_iter().collect();
        let mut blocks: Vec<TimeBlock> = cuts
            .chunks_exact(2)
            .map(|pair| {
                TimeBlock::new(
                    TimeOfDay::from_minutes(pair[0]).unwrap(),
                    TimeOfDay::from_minutes(pair[1]).unwrap(),
                )
                .unwrap()
            })
            .collect();
        if reverse {
            blocks.reverse();
        }
        blocks
    })
}

fn arb_day() -> impl Strategy<Value = DaySchedule> {
    (any::<bool>(), arb_blocks(), arb_duration()).prop_map(|(open, blocks, duration)| DaySchedule {
        is_available: open,
        time_blocks: blocks,
        slot_duration_minutes: duration,
    })
}

/// A date in 2026 and a schedule whose matching weekday is `day`.
fn arb_schedule_and_date() -> impl Strategy<Value = (WeeklySchedule, NaiveDate)> {
    (arb_day(), 0i64..365).prop_map(|(day, offset)| {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(offset);
        let schedule = WeeklySchedule::default().with_day(WeekDay::of(date), day);
        (schedule, date)
    })
}

fn arb_appointments(date: NaiveDate) -> impl Strategy<Value = Vec<BookedAppointment>> {
    let status = prop_oneof![
        Just(AppointmentStatus::Pending),
        Just(AppointmentStatus::Confirmed),
        Just(AppointmentStatus::Completed),
        Just(AppointmentStatus::Cancelled),
        Just(AppointmentStatus::Rejected),
    ];
    prop::collection::vec((0u32..1440, status), 0..6).prop_map(move |items| {
        items
            .into_iter()
            .map(|(m, s)| BookedAppointment::new(date, TimeOfDay::from_minutes(m).unwrap(), s))
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn time_string_roundtrip(s in arb_time_string()) {
        let minutes = to_minutes(&s).unwrap();
        prop_assert!(minutes < 1440);
        let back = to_time_string(minutes).unwrap();

        // Canonical form pads the hour to two digits.
        let canonical = if s.find(':') == Some(1) { format!("0{}", s) } else { s.clone() };
        prop_assert_eq!(back, canonical);
    }

    #[test]
    fn minutes_roundtrip(m in 0u32..1440) {
        prop_assert_eq!(to_minutes(&to_time_string(m).unwrap()).unwrap(), m);
    }

    #[test]
    fn generated_blocks_never_overlap(blocks in arb_blocks()) {
        prop_assert!(!has_overlap(&blocks));
    }

    #[test]
    fn slots_strictly_ascending_and_inside_blocks((schedule, date) in arb_schedule_and_date()) {
        let slots = list_available_slots(&schedule, date, &[]);
        let (_, day) = schedule.day_for(date);

        for pair in slots.windows(2) {
            prop_assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        for slot in &slots {
            let fits = day.working_blocks().iter().any(|b| {
                b.fits(*slot, day.slot_duration_minutes)
                    && (slot.minutes() - b.start().minutes()) % day.slot_duration_minutes == 0
            });
            prop_assert!(fits, "{} is not an aligned slot inside any block", slot);
        }
    }

    #[test]
    fn closed_day_never_offers_slots((schedule, date) in arb_schedule_and_date()) {
        let (weekday, day) = schedule.day_for(date);
        let closed = schedule
            .clone()
            .with_day(weekday, DaySchedule { is_available: false, ..day.clone() });
        prop_assert!(list_available_slots(&closed, date, &[]).is_empty());
    }

    #[test]
    fn listing_matches_validation_on_grid(
        (schedule, date, appointments) in arb_schedule_and_date()
            .prop_flat_map(|(s, d)| (Just(s), Just(d), arb_appointments(d)))
    ) {
        let (_, day) = schedule.day_for(date);
        let listed = available_slots(&schedule, date, &appointments);

        // Every grid candidate is listed exactly when validation accepts it.
        for candidate in candidate_slots(day) {
            let accepted = is_slot_available(&schedule, date, candidate, &appointments).is_available();
            prop_assert_eq!(listed.contains(&candidate), accepted, "disagree on {}", candidate);
        }
    }

    #[test]
    fn no_listed_slot_conflicts_with_active_booking(
        (schedule, date, appointments) in arb_schedule_and_date()
            .prop_flat_map(|(s, d)| (Just(s), Just(d), arb_appointments(d)))
    ) {
        let (_, day) = schedule.day_for(date);
        let listed = available_slots(&schedule, date, &appointments);
        for slot in &listed {
            for apt in appointments.iter().filter(|a| a.status.is_active()) {
                prop_assert!(slot.distance(apt.time) >= day.slot_duration_minutes);
            }
        }
    }
}
