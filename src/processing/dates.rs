use chrono::{Datelike, Days, NaiveDate};

/// Shift a date by whole calendar years, rolling 29 February over to
/// 1 March when the target year is not a leap year.
///
/// Returns `None` when the result falls outside the representable range.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Last day a passport issued before `age` remains valid: the `age`-th
/// birthday plus the grace period.
pub fn replacement_deadline(birth_date: NaiveDate, age: i32, grace_days: u64) -> Option<NaiveDate> {
    add_years(birth_date, age)?.checked_add_days(Days::new(grace_days))
}
