/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  data_ecommerce.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → OrderDataset (sorted by order date)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ OrderDataset  │  Vec<OrderRecord>, min/max date
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive [start, end] date range → filtered rows
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  daily orders, category orders, rating rates
///   └───────────┘
/// ```
///
/// Everything below the UI is pure and synchronous: each date-range change
/// triggers one full filter-and-aggregate pass over the in-memory table.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
