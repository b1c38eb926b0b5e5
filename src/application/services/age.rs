use chrono::{Datelike, NaiveDate};

/// Whole years between `date_of_birth` and `today`.
///
/// Compares ordinal days rather than month/day pairs, so around Feb 29 the
/// result can be one lower than the calendar age when exactly one of the two
/// years is a leap year. Future birth dates are not rejected.
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if today.ordinal() < date_of_birth.ordinal() {
        age -= 1;
    }
    age
}
