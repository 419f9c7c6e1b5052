use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::model::{CategoryOrdersRow, CategoryRateRow, DailyOrdersRow, OrderRecord};

// ---------------------------------------------------------------------------
// Group-and-reduce aggregations
// ---------------------------------------------------------------------------
//
// Each function here is pure: filtered rows in, owned derived table out.
// They share no state and can run in any order. Groups that end up empty
// after filtering simply never appear.

/// Accumulator for count-distinct-orders + sum-price reductions.
#[derive(Default)]
struct OrderGroup<'a> {
    order_ids: BTreeSet<&'a str>,
    total_price: f64,
}

impl<'a> OrderGroup<'a> {
    fn add(&mut self, record: &'a OrderRecord) {
        self.order_ids.insert(record.order_id.as_str());
        if let Some(price) = record.price {
            self.total_price += price;
        }
    }
}

/// Per distinct order date: count of unique order ids and total price.
/// Output ascends by date, matching the base table's sort.
pub fn daily_orders(records: &[OrderRecord]) -> Vec<DailyOrdersRow> {
    let mut groups: BTreeMap<NaiveDate, OrderGroup<'_>> = BTreeMap::new();
    for record in records {
        groups.entry(record.order_day()).or_default().add(record);
    }

    groups
        .into_iter()
        .map(|(order_date, group)| DailyOrdersRow {
            order_date,
            unique_orders: group.order_ids.len() as u64,
            total_price: group.total_price,
        })
        .collect()
}

/// Per category: count of unique order ids and total price. Callers sort by
/// whichever column they care about.
pub fn category_orders(records: &[OrderRecord]) -> Vec<CategoryOrdersRow> {
    let mut groups: BTreeMap<&str, OrderGroup<'_>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.category.as_str())
            .or_default()
            .add(record);
    }

    groups
        .into_iter()
        .map(|(category, group)| CategoryOrdersRow {
            category: category.to_string(),
            unique_orders: group.order_ids.len() as u64,
            total_price: group.total_price,
        })
        .collect()
}

/// Per category, the fraction of rating observations strictly above 3,
/// sorted descending by rate.
pub fn category_rating_high(records: &[OrderRecord]) -> Vec<CategoryRateRow> {
    rating_rate(records, |rating| rating > 3)
}

/// Per category, the fraction of rating observations strictly below 3,
/// sorted descending by rate. Ratings of exactly 3 count toward neither
/// this table nor the high one.
pub fn category_rating_low(records: &[OrderRecord]) -> Vec<CategoryRateRow> {
    rating_rate(records, |rating| rating < 3)
}

/// Shared rate computation. Null ratings are not observations: they join
/// neither the numerator nor the denominator, and a category with no rated
/// rows at all is omitted. The sort is stable, so equal rates keep the
/// grouping (alphabetical) order.
fn rating_rate(records: &[OrderRecord], matches: impl Fn(u8) -> bool) -> Vec<CategoryRateRow> {
    let mut groups: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for record in records {
        if let Some(rating) = record.rating {
            let (hits, observed) = groups.entry(record.category.as_str()).or_default();
            *observed += 1;
            if matches(rating) {
                *hits += 1;
            }
        }
    }

    let mut rows: Vec<CategoryRateRow> = groups
        .into_iter()
        .map(|(category, (hits, observed))| CategoryRateRow {
            category: category.to_string(),
            rate: hits as f64 / observed as f64,
        })
        .collect();
    rows.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    rows
}
