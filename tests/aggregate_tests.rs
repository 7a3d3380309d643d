mod common;
use chrono::{NaiveDate, TimeDelta};
use common::{log_with, session};
use talogo::core::calculator::hierarchy::aggregate;
use talogo::core::logic::Core;
use talogo::core::summary::render;
use talogo::models::session::Session;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample() -> Vec<Session> {
    vec![
        session(&["A", "B"], "2024-01-01T09:00:00Z", "2024-01-01T10:00:00Z"),
        session(&["A", "C"], "2024-01-01T10:00:00Z", "2024-01-01T12:00:00Z"),
        session(&["A"], "2024-01-01T13:00:00Z", "2024-01-01T13:30:00Z"),
        session(&["Z"], "2024-01-01T14:00:00Z", "2024-01-01T14:15:00Z"),
        session(&["A", "C", "D"], "2024-01-02T08:00:00Z", "2024-01-02T09:00:00Z"),
    ]
}

#[test]
fn test_own_and_total_durations() {
    let forest = aggregate(&sample()[..2]);
    let tree = forest.day(day("2024-01-01")).unwrap();

    let a = tree.find(&["A"]).unwrap();
    assert_eq!(a.total, TimeDelta::hours(3));
    assert_eq!(a.own, TimeDelta::zero());

    let b = tree.find(&["A", "B"]).unwrap();
    assert_eq!((b.own, b.total), (TimeDelta::hours(1), TimeDelta::hours(1)));

    let c = tree.find(&["A", "C"]).unwrap();
    assert_eq!((c.own, c.total), (TimeDelta::hours(2), TimeDelta::hours(2)));
}

#[test]
fn test_total_is_own_plus_children() {
    let forest = aggregate(&sample());
    let tree = forest.day(day("2024-01-01")).unwrap();

    let a = tree.find(&["A"]).unwrap();
    assert_eq!(a.own, TimeDelta::minutes(30));
    let children = tree
        .children(a)
        .fold(TimeDelta::zero(), |acc, c| acc + c.total);
    assert_eq!(a.total, a.own + children);
    assert_eq!(tree.day_total(), TimeDelta::minutes(225));
}

#[test]
fn test_days_are_separate_forests() {
    let forest = aggregate(&sample());
    assert_eq!(forest.days.len(), 2);

    let second = forest.day(day("2024-01-02")).unwrap();
    let roots: Vec<&str> = second.roots().map(|n| n.name.as_str()).collect();
    assert_eq!(roots, ["A"]);
    let a = second.find(&["A"]).unwrap();
    assert_eq!(second.children(a).count(), 1);
    assert!(second.find(&["A", "B"]).is_none());
    assert_eq!(
        second.find(&["A", "C", "D"]).unwrap().own,
        TimeDelta::hours(1)
    );
}

#[test]
fn test_day_follows_local_start_date() {
    // 23:30 at -05:00 is already the next day in UTC.
    let s = session(&["Late"], "2024-01-01T23:00:00-05:00", "2024-01-01T23:30:00-05:00");
    let forest = aggregate(&[s]);
    assert!(forest.day(day("2024-01-01")).is_some());
    assert!(forest.day(day("2024-01-02")).is_none());
}

#[test]
fn test_interior_empty_title_ends_chain() {
    let mut s = session(&["A", "B", "C"], "2024-01-01T09:00:00Z", "2024-01-01T10:00:00Z");
    s.titles[1].clear();

    let forest = aggregate(&[s]);
    let tree = forest.day(day("2024-01-01")).unwrap();
    assert_eq!(tree.roots().count(), 1);
    let a = tree.find(&["A"]).unwrap();
    assert_eq!(a.own, TimeDelta::hours(1));
    assert_eq!(tree.children(a).count(), 0);
}

#[test]
fn test_render_report() {
    let report = render(&aggregate(&sample()));
    assert_eq!(
        report,
        "Date: 2024-01-01\n\
         Total: 3.75 hs\n\
         \x20 A: 3.50 hs\n\
         \x20   B: 1.00 hs\n\
         \x20   C: 2.00 hs\n\
         \x20 Z: 0.25 hs\n\
         \n\
         Date: 2024-01-02\n\
         Total: 1.00 hs\n\
         \x20 A: 1.00 hs\n\
         \x20   C: 1.00 hs\n\
         \x20     D: 1.00 hs\n\
         \n"
    );
}

#[test]
fn test_report_is_independent_of_input_order() {
    let forward = aggregate(&sample());
    let mut reversed = sample();
    reversed.reverse();
    let backward = aggregate(&reversed);

    assert_eq!(render(&forward), render(&backward));
    for (date, tree) in &forward.days {
        let other = backward.day(*date).unwrap();
        let names: Vec<&str> = tree.roots().map(|n| n.name.as_str()).collect();
        let other_names: Vec<&str> = other.roots().map(|n| n.name.as_str()).collect();
        assert_eq!(names, other_names);
        assert_eq!(tree.day_total(), other.day_total());
    }
}

#[test]
fn test_no_sessions_gives_empty_report() {
    let forest = aggregate(&[]);
    assert!(forest.is_empty());
    assert_eq!(render(&forest), "");
}

#[test]
fn test_build_summary_with_period_and_bad_row() {
    let (_dir, path) = log_with(
        "summary",
        "start_time,end_time,title1,title2\n\
         2024-01-01T09:00:00Z,2024-01-01T10:00:00Z,A,B\n\
         2024-01-01T10:00:00Z,not-a-time,A,C\n\
         2024-02-01T09:00:00Z,2024-02-01T10:00:00Z,A,\n",
    );

    let all = Core::build_summary(&path, None).unwrap();
    assert_eq!(all.sessions, 2);
    assert_eq!(all.diagnostics.len(), 1);
    assert_eq!(all.forest.days.len(), 2);

    let feb = Core::build_summary(&path, Some("2024-02")).unwrap();
    assert_eq!(feb.forest.days.len(), 1);
    assert!(feb.forest.day(day("2024-02-01")).is_some());

    let range = Core::build_summary(&path, Some("2024-01-01:2024-01-31")).unwrap();
    assert_eq!(range.forest.days.keys().copied().collect::<Vec<_>>(), [day("2024-01-01")]);

    assert!(Core::build_summary(&path, Some("last-tuesday")).is_err());
}
