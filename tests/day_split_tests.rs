mod common;
use common::{session, ts};
use talogo::core::calculator::day_split::split_by_day;
use talogo::models::session::Session;

fn assert_contiguous(original: &Session, segments: &[Session]) {
    assert_eq!(segments.first().unwrap().start, original.start);
    assert_eq!(segments.last().unwrap().end, original.end);
    for w in segments.windows(2) {
        assert_eq!(w[0].end, w[1].start, "gap or overlap between segments");
    }
    for s in segments {
        assert_eq!(s.titles, original.titles);
        assert!(s.end >= s.start);
    }
    let total = segments
        .iter()
        .fold(chrono::TimeDelta::zero(), |acc, s| acc + s.duration());
    assert_eq!(total, original.duration());
}

#[test]
fn test_same_day_is_single_segment() {
    let s = session(&["A", "B"], "2024-03-10T09:00:00+01:00", "2024-03-10T17:30:00+01:00");
    let segs = split_by_day(&s);
    assert_eq!(segs, vec![s]);
}

#[test]
fn test_split_at_utc_midnight() {
    let s = session(&["A"], "2024-01-01T23:00:00Z", "2024-01-02T01:00:00Z");
    let segs = split_by_day(&s);

    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].start, ts("2024-01-01T23:00:00Z"));
    assert_eq!(segs[0].end, ts("2024-01-02T00:00:00Z"));
    assert_eq!(segs[1].start, ts("2024-01-02T00:00:00Z"));
    assert_eq!(segs[1].end, ts("2024-01-02T01:00:00Z"));
    assert_contiguous(&s, &segs);
}

#[test]
fn test_split_uses_offset_of_start() {
    // 22:00 to 02:00 at -05:00 crosses local midnight, not UTC midnight.
    let s = session(&["A"], "2024-01-01T22:00:00-05:00", "2024-01-02T02:00:00-05:00");
    let segs = split_by_day(&s);

    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].end, ts("2024-01-02T00:00:00-05:00"));
    assert_eq!(segs[1].start.date_naive().to_string(), "2024-01-02");
    assert_contiguous(&s, &segs);
}

#[test]
fn test_split_across_several_days() {
    let s = session(&["Trip"], "2024-02-27T20:00:00Z", "2024-03-01T06:00:00Z");
    let segs = split_by_day(&s);

    // Feb 27, Feb 28, Feb 29 (leap year), Mar 1
    assert_eq!(segs.len(), 4);
    let days: Vec<String> = segs.iter().map(|s| s.date_str()).collect();
    assert_eq!(days, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
    assert_eq!(segs[1].duration(), chrono::TimeDelta::hours(24));
    assert_contiguous(&s, &segs);
}

#[test]
fn test_end_exactly_at_midnight_has_no_empty_tail() {
    let s = session(&["A"], "2024-01-01T22:00:00Z", "2024-01-02T00:00:00Z");
    let segs = split_by_day(&s);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].end, ts("2024-01-02T00:00:00Z"));
}

#[test]
fn test_zero_length_session() {
    let s = session(&["A"], "2024-01-01T10:00:00Z", "2024-01-01T10:00:00Z");
    let segs = split_by_day(&s);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].duration(), chrono::TimeDelta::zero());
}

#[test]
fn test_each_segment_within_one_day() {
    let s = session(&["A"], "2024-12-30T12:34:56+09:00", "2025-01-02T03:04:05+09:00");
    let segs = split_by_day(&s);
    assert_eq!(segs.len(), 4);

    for seg in &segs {
        let day = seg.start.date_naive();
        let last_instant = seg.end - chrono::TimeDelta::seconds(1);
        assert!(seg.end == seg.start || last_instant.date_naive() == day);
    }
    assert_contiguous(&s, &segs);
}
