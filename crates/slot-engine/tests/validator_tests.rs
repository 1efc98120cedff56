//! Tests for schedule validation: time format helpers, overlap detection,
//! block ordering and whole-schedule normalization.

use slot_engine::schedule::{DaySchedule, WeeklySchedule};
use slot_engine::time::{TimeBlock, WeekDay};
use slot_engine::validator::{
    has_overlap, is_valid_time_format, sort_blocks, to_minutes, to_time_string,
    validate_day_schedule, validate_weekly_schedule,
};
use slot_engine::SlotError;

fn block(start: &str, end: &str) -> TimeBlock {
    TimeBlock::parse(start, end).unwrap()
}

// ── Format helpers ──────────────────────────────────────────────────────────

#[test]
fn valid_time_formats() {
    for ok in ["9:00 AM", "09:00 AM", "12:00 PM", "1:05 PM", "11:59 PM"] {
        assert!(is_valid_time_format(ok), "{ok:?} should be valid");
    }
    for bad in ["0:00 AM", "13:00 PM", "9:00", "09:00 XM", "9.00 AM"] {
        assert!(!is_valid_time_format(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn to_minutes_and_back() {
    assert_eq!(to_minutes("12:00 AM").unwrap(), 0);
    assert_eq!(to_minutes("12:00 PM").unwrap(), 720);
    assert_eq!(to_minutes("04:45 PM").unwrap(), 16 * 60 + 45);
    assert_eq!(to_time_string(0).unwrap(), "12:00 AM");
    assert_eq!(to_time_string(720).unwrap(), "12:00 PM");
    assert_eq!(to_time_string(16 * 60 + 45).unwrap(), "04:45 PM");
}

#[test]
fn to_minutes_never_coerces() {
    assert!(matches!(
        to_minutes("9 AM"),
        Err(SlotError::InvalidFormat(_))
    ));
    assert!(matches!(
        to_time_string(24 * 60),
        Err(SlotError::MinutesOutOfRange(_))
    ));
}

// ── Overlap detection ───────────────────────────────────────────────────────

#[test]
fn overlapping_blocks_detected() {
    let blocks = [block("09:00 AM", "11:00 AM"), block("10:00 AM", "12:00 PM")];
    assert!(has_overlap(&blocks));
}

#[test]
fn touching_blocks_are_not_overlap() {
    let blocks = [block("09:00 AM", "10:00 AM"), block("10:00 AM", "11:00 AM")];
    assert!(!has_overlap(&blocks));
}

#[test]
fn contained_block_is_overlap() {
    let blocks = [block("09:00 AM", "05:00 PM"), block("12:00 PM", "01:00 PM")];
    assert!(has_overlap(&blocks));
}

#[test]
fn overlap_found_between_non_adjacent_entries() {
    // Unsorted input: the first and third blocks collide.
    let blocks = [
        block("02:00 PM", "04:00 PM"),
        block("09:00 AM", "10:00 AM"),
        block("03:30 PM", "05:00 PM"),
    ];
    assert!(has_overlap(&blocks));
}

#[test]
fn empty_and_single_block_never_overlap() {
    assert!(!has_overlap(&[]));
    assert!(!has_overlap(&[block("09:00 AM", "10:00 AM")]));
}

// ── Sorting ─────────────────────────────────────────────────────────────────

#[test]
fn sort_blocks_orders_by_start_without_mutating_input() {
    let blocks = vec![
        block("01:00 PM", "05:00 PM"),
        block("08:00 AM", "09:00 AM"),
        block("10:00 AM", "12:00 PM"),
    ];
    let sorted = sort_blocks(&blocks);
    let starts: Vec<String> = sorted.iter().map(|b| b.start().to_string()).collect();
    assert_eq!(starts, ["08:00 AM", "10:00 AM", "01:00 PM"]);
    assert_eq!(blocks[0].start().to_string(), "01:00 PM");
}

// ── Day and week validation ─────────────────────────────────────────────────

#[test]
fn overlapping_open_day_rejected_with_day_name() {
    let day = DaySchedule::open(
        vec![block("09:00 AM", "11:00 AM"), block("10:30 AM", "12:00 PM")],
        30,
    );
    let err = validate_day_schedule(WeekDay::Tuesday, &day).unwrap_err();
    assert!(matches!(err, SlotError::Overlap { day: WeekDay::Tuesday }));
    assert_eq!(err.to_string(), "Overlapping time blocks on tuesday");
}

#[test]
fn overlapping_closed_day_is_accepted() {
    let day = DaySchedule {
        is_available: false,
        ..DaySchedule::open(
            vec![block("09:00 AM", "11:00 AM"), block("10:30 AM", "12:00 PM")],
            60,
        )
    };
    assert!(validate_day_schedule(WeekDay::Sunday, &day).is_ok());
}

#[test]
fn zero_slot_duration_rejected() {
    let day = DaySchedule::open(vec![block("09:00 AM", "10:00 AM")], 0);
    assert!(matches!(
        validate_day_schedule(WeekDay::Monday, &day),
        Err(SlotError::InvalidSlotDuration(0))
    ));
}

#[test]
fn full_day_or_longer_slot_duration_rejected() {
    for duration in [1440, 10_000, u32::MAX] {
        let day = DaySchedule::open(vec![block("09:00 AM", "05:00 PM")], duration);
        assert!(
            matches!(
                validate_day_schedule(WeekDay::Wednesday, &day),
                Err(SlotError::InvalidSlotDuration(d)) if d == duration
            ),
            "{duration} should be rejected"
        );
    }
}

#[test]
fn oversized_duration_in_stored_document_fails_weekly_validation() {
    let mut value = serde_json::to_value(WeeklySchedule::default()).unwrap();
    value["wednesday"]["slotDuration"] = serde_json::json!(u32::MAX);
    let schedule = WeeklySchedule::from_json(&value.to_string()).unwrap();
    assert!(matches!(
        validate_weekly_schedule(&schedule),
        Err(SlotError::InvalidSlotDuration(u32::MAX))
    ));
}

#[test]
fn longest_in_day_duration_is_accepted() {
    let day = DaySchedule::open(vec![block("09:00 AM", "05:00 PM")], 1439);
    assert!(validate_day_schedule(WeekDay::Wednesday, &day).is_ok());
}

#[test]
fn valid_day_is_returned_sorted() {
    let day = DaySchedule::open(
        vec![block("02:00 PM", "06:00 PM"), block("09:00 AM", "12:00 PM")],
        45,
    );
    let normalized = validate_day_schedule(WeekDay::Friday, &day).unwrap();
    assert_eq!(normalized.time_blocks[0], block("09:00 AM", "12:00 PM"));
    assert_eq!(normalized.time_blocks[1], block("02:00 PM", "06:00 PM"));
    assert_eq!(normalized.slot_duration_minutes, 45);
    assert!(normalized.is_available);
}

#[test]
fn open_day_without_blocks_is_valid() {
    let day = DaySchedule::open(vec![], 60);
    assert!(validate_day_schedule(WeekDay::Monday, &day).is_ok());
}

#[test]
fn default_schedule_is_valid() {
    let schedule = WeeklySchedule::default();
    assert_eq!(validate_weekly_schedule(&schedule).unwrap(), schedule);
}

#[test]
fn weekly_validation_reports_first_bad_day() {
    let bad = DaySchedule::open(
        vec![block("09:00 AM", "11:00 AM"), block("10:00 AM", "12:00 PM")],
        60,
    );
    let schedule = WeeklySchedule::default()
        .with_day(WeekDay::Thursday, bad.clone())
        .with_day(WeekDay::Saturday, bad);
    assert!(matches!(
        validate_weekly_schedule(&schedule),
        Err(SlotError::Overlap { day: WeekDay::Thursday })
    ));
}

#[test]
fn weekly_validation_sorts_every_day() {
    let unsorted = DaySchedule::open(
        vec![block("01:00 PM", "03:00 PM"), block("09:00 AM", "11:00 AM")],
        60,
    );
    let schedule = WeeklySchedule::default().with_day(WeekDay::Monday, unsorted);
    let normalized = validate_weekly_schedule(&schedule).unwrap();
    assert_eq!(
        normalized.monday.time_blocks,
        vec![block("09:00 AM", "11:00 AM"), block("01:00 PM", "03:00 PM")]
    );
    assert_eq!(normalized.tuesday, schedule.tuesday);
}
