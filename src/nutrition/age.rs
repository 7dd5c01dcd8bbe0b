//! Age calculator

use chrono::{Datelike, NaiveDate};

/// Whole years between `birth_date` and `today`.
///
/// `today` is passed in rather than read from the clock. Birth dates after
/// `today` are not rejected here; range checks belong to the caller.
pub fn age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years - 1
    } else {
        years
    }
}
