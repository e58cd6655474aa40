use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, Months, NaiveDate};

/// Reporting period boundaries containing one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodEnds {
    pub week_end: NaiveDate,
    pub month_end: NaiveDate,
}

pub fn period_ends(day: NaiveDate) -> PeriodEnds {
    PeriodEnds {
        week_end: end_of_week(day),
        month_end: end_of_month(day),
    }
}

/// Saturday on or after `day`; weeks run Sunday through Saturday.
pub fn end_of_week(day: NaiveDate) -> NaiveDate {
    let weekday = day.weekday().num_days_from_sunday() as i64;
    day + Duration::days(6 - weekday)
}

/// Last day of `day`'s month: first of the next month minus one day.
pub fn end_of_month(day: NaiveDate) -> NaiveDate {
    let first = day - Duration::days(day.day0() as i64);
    match first.checked_add_months(Months::new(1)) {
        Some(next_first) => next_first - Duration::days(1),
        // December of the last representable year
        None => NaiveDate::MAX,
    }
}

/// Reads the calendar day from the first ten characters of an ISO-8601
/// date or timestamp. The offset, if any, is ignored.
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let prefix = input.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Resolves a day given on the command line: `today`, `yesterday` or a date.
pub fn resolve_day(input: &str) -> Result<NaiveDate> {
    resolve_day_from(input, Local::now().date_naive())
}

fn resolve_day_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    parse_day(input).ok_or_else(|| anyhow!("Could not parse date: {}", input))
}
