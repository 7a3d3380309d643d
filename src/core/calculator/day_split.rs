use crate::models::session::Session;
use chrono::{DateTime, Days, FixedOffset, NaiveTime, TimeZone};

/// Split a session into one segment per calendar day touched, in the
/// offset of `session.start`.
///
/// Segments are contiguous: each one ends exactly where the next starts,
/// at local midnight. The first starts at `start`, the last ends at `end`.
/// A midnight boundary belongs to the segment that starts there, except
/// when it is the session end itself.
pub fn split_by_day(session: &Session) -> Vec<Session> {
    let offset = *session.start.offset();
    let end = session.end.with_timezone(&offset);

    let mut segments = Vec::new();
    let mut current = session.start;

    loop {
        let seg_end = match next_midnight(&current) {
            Some(midnight) if midnight < end => midnight,
            _ => end,
        };

        segments.push(Session {
            titles: session.titles.clone(),
            start: current,
            end: seg_end,
        });

        if seg_end == end {
            break;
        }
        current = seg_end;
    }

    segments
}

/// First instant of the day after `ts`, in the offset of `ts`.
fn next_midnight(ts: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let next_day = ts.date_naive().checked_add_days(Days::new(1))?;
    ts.offset()
        .from_local_datetime(&next_day.and_time(NaiveTime::MIN))
        .single()
}
