use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Dates covered by a period expression:
/// - `YYYY-MM-DD`, `YYYY-MM`, `YYYY`
/// - `START:END` where both sides are any of the above
pub fn parse_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    let p = p.trim();

    if let Some((start, end)) = p.split_once(':') {
        return generate_range(start, end);
    }
    if p.eq_ignore_ascii_case("today") {
        return Ok(vec![today()]);
    }

    generate_from_period(p)
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {p}"))
}

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start.trim())?;
    let e = generate_from_period(end.trim())?;

    let (Some(&start_date), Some(&end_date)) = (s.first(), e.last()) else {
        return Err(format!("Invalid range: {start}:{end}"));
    };
    if end_date < start_date {
        return Err(format!("Range end {end} is before start {start}"));
    }

    Ok(start_date.iter_days().take_while(|d| *d <= end_date).collect())
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| {
            first
                .iter_days()
                .take_while(|d| d.month() == month)
                .collect()
        })
        .unwrap_or_default()
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|first| first.iter_days().take_while(|d| d.year() == year).collect())
        .unwrap_or_default()
}
