use chrono::Weekday;
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::{
    BlockReason, BlockedRange, BookingError, DaySchedule, Interval, SlotRequest, TimeOfDay,
    generate_slots,
};

fn t(value: &str) -> TimeOfDay {
    value.parse().expect("valid time of day")
}

fn span(start: &str, end: &str) -> Interval {
    Interval::new(t(start), t(end)).expect("valid interval")
}

fn day(opens: &str, closes: &str) -> DaySchedule {
    DaySchedule::open(Weekday::Mon, t(opens), t(closes))
}

fn slots_for(request: &SlotRequest) -> Vec<String> {
    generate_slots(request)
        .expect("Failed to generate slots")
        .to_strings()
}

#[test]
fn test_slot_ending_at_close_is_bookable() {
    let request = SlotRequest::new(day("09:00", "10:00"), 60);

    assert_eq!(slots_for(&request), vec!["09:00"]);
}

#[test]
fn test_blocked_range_excludes_overlapping_starts() {
    let request = SlotRequest::new(day("09:00", "12:00"), 60)
        .with_slot_interval(30)
        .with_blocked_ranges([span("10:00", "11:00")]);

    assert_eq!(slots_for(&request), vec!["09:00", "11:00"]);
}

#[test]
fn test_overlapping_blocks_match_their_union() {
    let base = SlotRequest::new(day("09:00", "13:00"), 30).with_slot_interval(15);
    let split = base
        .clone()
        .with_blocked_ranges([span("10:00", "10:45"), span("10:30", "11:00")]);
    let merged = base.with_blocked_ranges([span("10:00", "11:00")]);

    assert_eq!(generate_slots(&split).unwrap(), generate_slots(&merged).unwrap());
}

#[test]
fn test_unsorted_bookings_and_manual_blocks() {
    let blocks = [
        BlockedRange::parse_span("15:00-16:30", BlockReason::Unavailable).unwrap(),
        BlockedRange::parse_span("12:00-13:00", BlockReason::Unavailable).unwrap(),
        BlockedRange::parse_span("12:30-13:30", BlockReason::Booked).unwrap(),
    ];
    let request = SlotRequest::new(day("08:00", "20:00"), 60).with_blocked_ranges(blocks);

    assert_eq!(
        slots_for(&request),
        vec![
            "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "13:30", "14:00",
            "16:30", "17:00", "17:30", "18:00", "18:30", "19:00",
        ]
    );
}

#[test]
fn test_slot_may_end_when_block_starts_and_start_when_it_ends() {
    let request = SlotRequest::new(day("09:00", "11:00"), 30)
        .with_blocked_ranges([span("09:30", "10:00")]);

    assert_eq!(slots_for(&request), vec!["09:00", "10:00", "10:30"]);
}

#[test]
fn test_step_larger_than_duration() {
    let request = SlotRequest::new(day("09:00", "11:00"), 20).with_slot_interval(45);

    assert_eq!(slots_for(&request), vec!["09:00", "09:45", "10:30"]);
}

#[test]
fn test_block_outside_window_is_ignored() {
    let request = SlotRequest::new(day("09:00", "10:00"), 30)
        .with_blocked_ranges([span("06:00", "08:00"), span("18:00", "19:00")]);

    assert_eq!(slots_for(&request), vec!["09:00", "09:30"]);
}

#[test]
fn test_block_covering_whole_day_leaves_nothing() {
    let request = SlotRequest::new(day("09:00", "17:00"), 30)
        .with_blocked_ranges([span("08:00", "18:00")]);

    assert!(generate_slots(&request).unwrap().is_empty());
}

#[test]
fn test_duration_longer_than_window() {
    let request = SlotRequest::new(day("09:00", "10:00"), 90);

    assert!(generate_slots(&request).unwrap().is_empty());
}

#[test]
fn test_last_minute_of_day_closing() {
    let request = SlotRequest::new(day("23:00", "23:59"), 29).with_slot_interval(30);

    assert_eq!(slots_for(&request), vec!["23:00", "23:30"]);
}

#[test]
fn test_midnight_opening_keeps_chronological_value() {
    let request = SlotRequest::new(day("00:00", "01:00"), 30);
    let slots = generate_slots(&request).unwrap();

    assert_eq!(slots.to_strings(), vec!["00:00", "00:30"]);
    assert_eq!(slots.as_slice()[0].display_label(), "12:00");
}

#[rstest]
#[case(0)]
#[case(-30)]
#[case(60)]
fn test_closed_day_is_empty_regardless_of_other_fields(#[case] duration: i32) {
    let request = SlotRequest::new(DaySchedule::closed(Weekday::Sun), duration)
        .with_slot_interval(0)
        .with_blocked_ranges([span("10:00", "11:00")]);

    assert!(generate_slots(&request).unwrap().is_empty());
}

#[test]
fn test_closed_flag_wins_over_hours() {
    let mut schedule = day("09:00", "17:00");
    schedule.is_closed = true;

    assert!(generate_slots(&SlotRequest::new(schedule, 30)).unwrap().is_empty());
}

#[rstest]
#[case("10:00", "10:00")]
#[case("17:00", "09:00")]
fn test_degenerate_hours_are_treated_as_closed(#[case] opens: &str, #[case] closes: &str) {
    let request = SlotRequest::new(day(opens, closes), 30);

    assert!(generate_slots(&request).unwrap().is_empty());
}

#[rstest]
#[case(0, 30)]
#[case(-15, 30)]
#[case(60, 0)]
#[case(60, -30)]
fn test_non_positive_minutes_are_invalid_input(#[case] duration: i32, #[case] interval: i32) {
    let request = SlotRequest::new(day("09:00", "17:00"), duration).with_slot_interval(interval);

    let err = generate_slots(&request).unwrap_err();
    assert!(matches!(err, BookingError::InvalidInput(_)), "got {err:?}");
}

#[test]
fn test_generation_is_idempotent() {
    let request = SlotRequest::new(day("08:00", "18:00"), 45)
        .with_slot_interval(15)
        .with_blocked_ranges([span("12:00", "13:00"), span("09:10", "09:40")]);

    assert_eq!(generate_slots(&request).unwrap(), generate_slots(&request).unwrap());
}

/// Reference answer: test every aligned candidate against every raw block.
fn brute_force(request: &SlotRequest) -> Vec<u16> {
    let opens = request.schedule.opens.minutes();
    let closes = request.schedule.closes.minutes();
    let duration = request.service_duration_minutes as u16;
    let step = request.slot_interval_minutes as u16;

    (opens..closes)
        .step_by(usize::from(step))
        .filter(|start| start + duration <= closes)
        .filter(|start| {
            request.blocked_ranges.iter().all(|block| {
                !(*start < block.end().minutes() && block.start().minutes() < start + duration)
            })
        })
        .collect()
}

#[test]
fn test_random_blocks_match_brute_force() {
    const DURATIONS: [i32; 5] = [15, 30, 45, 60, 90];
    const INTERVALS: [i32; 3] = [10, 15, 30];

    for _ in 0..200 {
        let duration = DURATIONS[(0..DURATIONS.len()).fake::<usize>()];
        let interval = INTERVALS[(0..INTERVALS.len()).fake::<usize>()];
        let block_count = (0..6usize).fake::<usize>();

        let blocks: Vec<Interval> = (0..block_count)
            .map(|_| {
                let start = (420u32..1200).fake::<u32>();
                let length = (5u32..150).fake::<u32>();
                Interval::new(
                    TimeOfDay::from_minutes(start).unwrap(),
                    TimeOfDay::from_minutes(start + length).unwrap(),
                )
                .unwrap()
            })
            .collect();

        let request = SlotRequest::new(day("08:00", "20:00"), duration)
            .with_slot_interval(interval)
            .with_blocked_ranges(blocks.clone());
        let slots = generate_slots(&request).unwrap();
        let minutes: Vec<u16> = slots.iter().map(|slot| slot.minutes()).collect();

        assert_eq!(minutes, brute_force(&request), "blocks: {blocks:?}");
        assert!(minutes.windows(2).all(|pair| pair[0] < pair[1]));
        for start in &minutes {
            for block in &blocks {
                let end = start + duration as u16;
                assert!(!(*start < block.end().minutes() && block.start().minutes() < end));
            }
        }
    }
}
