//! Calendar range calculators for report periods.
//!
//! Every function takes an explicit `now` reference so the core stays
//! deterministic under test; the `*_today` wrappers supply the real clock at
//! the boundary. Ranges are formatted as `YYYY-MM-DD` by truncating the
//! reference instant to its date component; no timezone conversion is
//! performed beyond whatever zone that instant carries.

use chrono::{Datelike, Days, Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range, formatted for the accounting API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    /// First day of the range, `YYYY-MM-DD`.
    pub from: String,
    /// Last day of the range, `YYYY-MM-DD`.
    pub to: String,
}

impl DateRange {
    fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: from.format("%Y-%m-%d").to_string(),
            to: to.format("%Y-%m-%d").to_string(),
        }
    }
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// Last calendar day of a month, computed as the day before the first of the
/// following month so leap years fall out of chrono's calendar.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    first_day_of_month(next_year, next_month)
        .checked_sub_days(Days::new(1))
        .unwrap_or(NaiveDate::MIN)
}

/// First and last calendar day of the month `months_ago` months before
/// `now`'s month (0 = the current month).
pub fn month_range(months_ago: u32, now: NaiveDate) -> DateRange {
    let total_months = now.year() * 12 + now.month0() as i32 - months_ago as i32;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;

    DateRange::new(first_day_of_month(year, month), last_day_of_month(year, month))
}

/// January 1 of `now`'s year through `now`, inclusive.
pub fn current_ytd_range(now: NaiveDate) -> DateRange {
    DateRange::new(first_day_of_month(now.year(), 1), now)
}

/// First day of `now`'s month through `now`, inclusive.
pub fn current_month_range(now: NaiveDate) -> DateRange {
    DateRange::new(first_day_of_month(now.year(), now.month()), now)
}

pub fn month_range_today(months_ago: u32) -> DateRange {
    month_range(months_ago, Local::now().date_naive())
}

pub fn current_ytd_range_today() -> DateRange {
    current_ytd_range(Local::now().date_naive())
}

pub fn current_month_range_today() -> DateRange {
    current_month_range(Local::now().date_naive())
}
