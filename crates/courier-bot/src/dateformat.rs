//! Calendar-string formatting for stored records.
//!
//! Sign-up dates and email dates are stored as display strings like
//! `"January 1st, 2022"`, not sortable timestamps. The ordinal suffix
//! keys off the last digit only, which is the historical behavior this
//! service's existing data was written with (so 11 renders as `11st` and
//! 10 as `10st`); changing it would fork the stored format.

use chrono::{Datelike, Local, NaiveDate};

/// Format a date as `"January 1st, 2022"`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_name(date.month()),
        day_with_suffix(date.day()),
        date.year()
    )
}

/// Today's date in the bot's local timezone, formatted for storage.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

fn day_with_suffix(day: u32) -> String {
    let suffix = match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        4..=9 => "th",
        _ => "st",
    };
    format!("{day}{suffix}")
}
