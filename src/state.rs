use chrono::NaiveDate;

use crate::data::aggregate::{
    category_orders, category_rating_high, category_rating_low, daily_orders,
};
use crate::data::filter::filter_by_date;
use crate::data::model::{
    CategoryOrdersRow, CategoryRateRow, DailyOrdersRow, OrderDataset, OrderRecord,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The base dataset is read-only once loaded; the filtered rows and the four
/// derived tables are caches, recomputed in full on every date-range change.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<OrderDataset>,

    /// Selected date range, inclusive on both ends.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Rows inside the selected range (cached).
    pub filtered: Vec<OrderRecord>,

    /// Derived tables over the filtered rows (cached).
    pub daily: Vec<DailyOrdersRow>,
    pub by_category: Vec<CategoryOrdersRow>,
    pub high_rate: Vec<CategoryRateRow>,
    pub low_rate: Vec<CategoryRateRow>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            dataset: None,
            start_date: today,
            end_date: today,
            filtered: Vec::new(),
            daily: Vec::new(),
            by_category: Vec::new(),
            high_rate: Vec::new(),
            low_rate: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the range to its full span.
    pub fn set_dataset(&mut self, dataset: OrderDataset) {
        self.start_date = dataset.min_date;
        self.end_date = dataset.max_date;
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// Apply a new date range, clamped to the dataset's date bounds, and
    /// rerun the filter-and-aggregate pass. An inverted range is allowed
    /// and simply produces empty tables.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        if let Some(ds) = &self.dataset {
            self.start_date = start.clamp(ds.min_date, ds.max_date);
            self.end_date = end.clamp(ds.min_date, ds.max_date);
            self.recompute();
        }
    }

    /// One full synchronous pass: filter, then the four aggregations.
    pub fn recompute(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.filtered = filter_by_date(&ds.records, self.start_date, self.end_date);
        self.daily = daily_orders(&self.filtered);
        self.by_category = category_orders(&self.filtered);
        self.high_rate = category_rating_high(&self.filtered);
        self.low_rate = category_rating_low(&self.filtered);
    }

    /// Count of distinct orders in range, summed over the daily table the
    /// same way the headline metric is shown.
    pub fn total_orders(&self) -> u64 {
        self.daily.iter().map(|row| row.unique_orders).sum()
    }

    /// Revenue in range as a raw number; formatting happens at the UI edge.
    pub fn total_revenue(&self) -> f64 {
        self.daily.iter().map(|row| row.total_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::OrderRecord;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(order_id: &str, d: &str, price: f64) -> OrderRecord {
        let date = day(d).and_hms_opt(10, 0, 0).unwrap();
        OrderRecord {
            order_id: order_id.to_string(),
            order_date: date,
            category: "toys".to_string(),
            price: Some(price),
            rating: Some(4),
            review_date: date,
        }
    }

    fn loaded_state() -> AppState {
        let ds = OrderDataset::from_records(vec![
            record("o1", "2023-01-01", 10.0),
            record("o2", "2023-01-15", 20.0),
            record("o3", "2023-01-31", 30.0),
        ])
        .unwrap();
        let mut state = AppState::default();
        state.set_dataset(ds);
        state
    }

    #[test]
    fn set_dataset_selects_full_range() {
        let state = loaded_state();
        assert_eq!(state.start_date, day("2023-01-01"));
        assert_eq!(state.end_date, day("2023-01-31"));
        assert_eq!(state.filtered.len(), 3);
        assert_eq!(state.total_orders(), 3);
        assert!((state.total_revenue() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn set_date_range_clamps_to_dataset_bounds() {
        let mut state = loaded_state();
        state.set_date_range(day("2022-06-01"), day("2023-01-20"));
        assert_eq!(state.start_date, day("2023-01-01"));
        assert_eq!(state.end_date, day("2023-01-20"));
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn inverted_range_empties_all_derived_tables() {
        let mut state = loaded_state();
        state.set_date_range(day("2023-01-20"), day("2023-01-05"));
        assert!(state.filtered.is_empty());
        assert!(state.daily.is_empty());
        assert!(state.by_category.is_empty());
        assert!(state.high_rate.is_empty());
        assert!(state.low_rate.is_empty());
        assert_eq!(state.total_orders(), 0);
        assert_eq!(state.total_revenue(), 0.0);
    }

    #[test]
    fn narrowing_the_range_recomputes_aggregates() {
        let mut state = loaded_state();
        state.set_date_range(day("2023-01-10"), day("2023-01-31"));
        assert_eq!(state.total_orders(), 2);
        assert!((state.total_revenue() - 50.0).abs() < 1e-9);
        assert_eq!(state.daily.len(), 2);
    }
}
