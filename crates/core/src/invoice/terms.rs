//! Payment-term due dates.

use chrono::{Days, NaiveDate};

/// Derives the due date from the issue date and the term length.
///
/// A positive term adds that many calendar days (not business days). A
/// zero or negative term returns `previous` unchanged: a due date computed
/// earlier is deliberately left in place when the term is cleared, so the
/// field keeps showing the last derived value exactly as the entry form
/// always has.
#[must_use]
pub fn due_date(
    issue_date: NaiveDate,
    days: i64,
    previous: Option<NaiveDate>,
) -> Option<NaiveDate> {
    if days > 0 {
        issue_date
            .checked_add_days(Days::new(days.unsigned_abs()))
            .or(previous)
    } else {
        previous
    }
}
