use chrono::NaiveDate;

use super::model::OrderRecord;

// ---------------------------------------------------------------------------
// Inclusive date-range filter
// ---------------------------------------------------------------------------

/// Return the rows whose order date falls in `[start, end]`, both inclusive.
///
/// Comparison is at day granularity: a record time-stamped 23:59:59 on the
/// end date is in range. An inverted range (`start > end`) yields an empty
/// table, not an error. Clamping the range to the dataset's date bounds is
/// the caller's responsibility.
pub fn filter_by_date(records: &[OrderRecord], start: NaiveDate, end: NaiveDate) -> Vec<OrderRecord> {
    records
        .iter()
        .filter(|r| {
            let day = r.order_day();
            start <= day && day <= end
        })
        .cloned()
        .collect()
}
