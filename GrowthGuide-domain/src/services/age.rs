use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::growth::{AgeDatePrecision, AgeSummary};
use crate::services::growth::GrowthServiceError;

static AGE_DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("age date pattern is valid"));

/// Parse an age date of the form `YYYY-MM-DD`.
///
/// A day of `00` means only the month is known; the first of that month is
/// used and the precision is [`AgeDatePrecision::Month`].
pub fn parse_age_date(age_date: &str) -> Result<(NaiveDate, AgeDatePrecision), GrowthServiceError> {
    if age_date.is_empty() {
        return Err(GrowthServiceError::InvalidDate("age_date must not be empty".to_string()));
    }

    let captures = AGE_DATE_PATTERN.captures(age_date).ok_or_else(|| {
        GrowthServiceError::InvalidDate(format!(
            "Invalid age_date format: {}, expected 'YYYY-MM-DD'",
            age_date
        ))
    })?;

    // The pattern only admits ASCII digits, so these parses cannot overflow
    let year: i32 = captures[1].parse().unwrap_or_default();
    let month: u32 = captures[2].parse().unwrap_or_default();
    let day: u32 = captures[3].parse().unwrap_or_default();

    if day == 0 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| (date, AgeDatePrecision::Month))
            .ok_or_else(|| GrowthServiceError::InvalidDate(format!("Invalid year-month: {}-{}", year, month)))
    } else {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| (date, AgeDatePrecision::Week))
            .ok_or_else(|| {
                GrowthServiceError::InvalidDate(format!("Invalid date: {}-{}-{}", year, month, day))
            })
    }
}

/// Whole years and remaining months between a birth date and `today`.
///
/// A month only counts once its day of month is reached. A birth date in
/// the future gives `(0, 0)`.
pub fn age_in_years_months(birth: NaiveDate, today: NaiveDate) -> (i32, i32) {
    if birth > today {
        return (0, 0);
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;

    if today.day() < birth.day() {
        months -= 1;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years, months)
}

/// Total months and remaining days, for children under one year.
///
/// Days borrow the length of the calendar month before `today`.
pub fn age_in_months_days(birth: NaiveDate, today: NaiveDate) -> (i32, i32) {
    if birth > today {
        return (0, 0);
    }

    let mut total_months =
        (today.year() - birth.year()) * 12 + (today.month() as i32 - birth.month() as i32);

    let days = if today.day() >= birth.day() {
        (today.day() - birth.day()) as i32
    } else {
        total_months -= 1;
        // A birth day past the end of the previous month counts from its last day
        let previous_month_days = days_in_previous_month(today);
        let anchor = (birth.day() as i32).min(previous_month_days);
        previous_month_days - anchor + today.day() as i32
    };

    (total_months, days)
}

fn days_in_previous_month(date: NaiveDate) -> i32 {
    // The day before the first of this month
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(30)
}

/// Whole weeks elapsed since birth
pub fn age_in_weeks(birth: NaiveDate, today: NaiveDate) -> i64 {
    if birth > today {
        return 0;
    }

    (today - birth).num_days() / 7
}

/// Whole months elapsed since birth
pub fn total_months(birth: NaiveDate, today: NaiveDate) -> i32 {
    let (years, months) = age_in_years_months(birth, today);
    years * 12 + months
}

fn pluralize(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn format_display(years: i32, months: i32, birth: NaiveDate, today: NaiveDate) -> String {
    if years < 1 {
        let (total_months, days) = age_in_months_days(birth, today);
        format!("{} {}", pluralize(total_months, "month"), pluralize(days, "day"))
    } else if months == 0 {
        pluralize(years, "year")
    } else {
        format!("{} {}", pluralize(years, "year"), pluralize(months, "month"))
    }
}

fn format_storage(years: i32, months: i32) -> String {
    format!("{} {}", pluralize(years, "year"), pluralize(months, "month"))
}

/// Parse an age date and describe the age it gives on `today`
pub fn calculate_and_format_age(age_date: &str, today: NaiveDate) -> Result<AgeSummary, GrowthServiceError> {
    let (birth, precision) = parse_age_date(age_date)?;
    let (years, months) = age_in_years_months(birth, today);

    Ok(AgeSummary {
        display: format_display(years, months, birth, today),
        storage: format_storage(years, months),
        years,
        months,
        total_months: years * 12 + months,
        weeks: age_in_weeks(birth, today),
        precision,
    })
}
