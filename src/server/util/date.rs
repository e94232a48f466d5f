use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Returns the half-open UTC range `[Jan 1 of year, Jan 1 of year + 1)`.
///
/// `None` when the year is outside chrono's representable range.
pub fn year_range(year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?.and_hms_opt(0, 0, 0)?;

    Some((Utc.from_utc_datetime(&start), Utc.from_utc_datetime(&end)))
}

/// Returns the half-open UTC range covering a single calendar day.
pub fn day_range(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = date.and_hms_opt(0, 0, 0)?;
    let end = date.succ_opt()?.and_hms_opt(0, 0, 0)?;

    Some((Utc.from_utc_datetime(&start), Utc.from_utc_datetime(&end)))
}
