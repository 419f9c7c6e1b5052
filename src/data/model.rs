use chrono::{NaiveDate, NaiveDateTime};

// ---------------------------------------------------------------------------
// OrderRecord – one line item of the source table
// ---------------------------------------------------------------------------

/// A single order line item (one row of the source CSV).
///
/// `order_id` is not unique per record: an order that spans several line
/// items appears once per item. `price` and `rating` are `Option` because
/// empty cells in the source file are nulls that aggregations skip.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_date: NaiveDateTime,
    pub category: String,
    pub price: Option<f64>,
    pub rating: Option<u8>,
    pub review_date: NaiveDateTime,
}

impl OrderRecord {
    /// The order date at day granularity, which is what filtering and the
    /// daily aggregation key on.
    pub fn order_day(&self) -> NaiveDate {
        self.order_date.date()
    }
}

// ---------------------------------------------------------------------------
// OrderDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table, sorted ascending by `order_date` and read-only
/// after load. `min_date` / `max_date` bound the date-range picker.
#[derive(Debug, Clone)]
pub struct OrderDataset {
    /// All line items, sorted ascending by order date.
    pub records: Vec<OrderRecord>,
    /// Earliest order date in the dataset (day granularity).
    pub min_date: NaiveDate,
    /// Latest order date in the dataset (day granularity).
    pub max_date: NaiveDate,
}

impl OrderDataset {
    /// Sort the records by order date and compute the date bounds.
    /// Returns `None` for an empty input; the dashboard needs a non-empty
    /// range to seed the date pickers.
    pub fn from_records(mut records: Vec<OrderRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        records.sort_by_key(|r| r.order_date);
        let min_date = records.first()?.order_day();
        let max_date = records.last()?.order_day();
        Some(OrderDataset {
            records,
            min_date,
            max_date,
        })
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty (never true for a loaded dataset).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Derived rows – outputs of the aggregators
// ---------------------------------------------------------------------------

/// Per-day order volume and revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOrdersRow {
    pub order_date: NaiveDate,
    /// Count of distinct order ids on this date.
    pub unique_orders: u64,
    /// Sum of non-null prices on this date.
    pub total_price: f64,
}

/// Per-category order volume and revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOrdersRow {
    pub category: String,
    pub unique_orders: u64,
    pub total_price: f64,
}

/// Per-category fraction of rating observations matching a predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRateRow {
    pub category: String,
    /// Fraction in [0, 1].
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(order_id: &str, day: &str) -> OrderRecord {
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
        OrderRecord {
            order_id: order_id.to_string(),
            order_date: date.and_hms_opt(12, 30, 0).unwrap(),
            category: "toys".to_string(),
            price: Some(10.0),
            rating: Some(4),
            review_date: date.and_hms_opt(18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn from_records_sorts_and_bounds() {
        let ds = OrderDataset::from_records(vec![
            record("o3", "2023-03-01"),
            record("o1", "2023-01-15"),
            record("o2", "2023-02-20"),
        ])
        .unwrap();

        let days: Vec<NaiveDate> = ds.records.iter().map(|r| r.order_day()).collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2023, 2, 20).unwrap(),
                NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            ]
        );
        assert_eq!(ds.min_date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(ds.max_date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn from_records_rejects_empty() {
        assert!(OrderDataset::from_records(Vec::new()).is_none());
    }
}
