use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use super::model::{OrderDataset, OrderRecord};

/// Columns the dashboard needs. Anything else in the file is carried by the
/// source but ignored here.
const REQUIRED_COLUMNS: [&str; 6] = [
    "order_id",
    "order_date",
    "category",
    "price",
    "rating",
    "review_date",
];

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Fatal load failures. There is no partial-success mode: any error aborts
/// the whole load and no data is shown.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: invalid {column} '{value}' (expected ISO-8601 date or date-time)")]
    InvalidDate {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// CSV loading
// ---------------------------------------------------------------------------

/// One raw CSV row. Dates stay as text here and are parsed with row context
/// below; unknown passthrough columns are dropped by serde.
#[derive(Debug, Deserialize)]
struct RawRow {
    order_id: String,
    order_date: String,
    category: String,
    price: Option<f64>,
    rating: Option<u8>,
    review_date: String,
}

/// Load the orders table from a CSV file.
///
/// Expected header (superset tolerated): `order_id`, `order_date`,
/// `category`, `price`, `rating`, `review_date`. The whole table is read
/// eagerly and returned sorted ascending by order date.
pub fn load_csv(path: &Path) -> Result<OrderDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        records.push(OrderRecord {
            order_date: parse_datetime(&raw.order_date, row_no, "order_date")?,
            review_date: parse_datetime(&raw.review_date, row_no, "review_date")?,
            order_id: raw.order_id,
            category: raw.category,
            price: raw.price,
            rating: raw.rating,
        });
    }

    OrderDataset::from_records(records).ok_or(LoadError::Empty)
}

/// Parse an ISO-8601 date or date-time cell. A bare date normalises to
/// midnight; filtering only looks at the date part anyway.
fn parse_datetime(value: &str, row: usize, column: &'static str) -> Result<NaiveDateTime, LoadError> {
    let trimmed = value.trim();

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    Err(LoadError::InvalidDate {
        row,
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_and_sorts_by_order_date() {
        let file = write_csv(
            "order_id,order_date,category,price,rating,review_date,city\n\
             o2,2023-01-05,books,25.5,4,2023-01-08,Jakarta\n\
             o1,2023-01-02 09:15:00,toys,10.0,5,2023-01-03,Bandung\n\
             o3,2023-01-03T18:00:00,books,12.0,2,2023-01-04,Medan\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        let ids: Vec<&str> = ds.records.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o3", "o2"]);
        assert_eq!(ds.min_date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(ds.max_date, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());

        // date-time cells keep their time of day, bare dates get midnight
        assert_eq!(
            ds.records[0].order_date,
            NaiveDate::from_ymd_opt(2023, 1, 2)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap()
        );
        assert_eq!(
            ds.records[2].order_date,
            NaiveDate::from_ymd_opt(2023, 1, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn empty_cells_become_nulls() {
        let file = write_csv(
            "order_id,order_date,category,price,rating,review_date\n\
             o1,2023-01-02,toys,,,2023-01-03\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].price, None);
        assert_eq!(ds.records[0].rating, None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let file = write_csv(
            "order_id,order_date,category,price,review_date\n\
             o1,2023-01-02,toys,10.0,2023-01-03\n",
        );

        match load_csv(file.path()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "rating"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_csv(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv("order_id,order_date,category,price,rating,review_date\n");
        assert!(matches!(load_csv(file.path()), Err(LoadError::Empty)));
    }

    #[test]
    fn bad_date_reports_row_and_column() {
        let file = write_csv(
            "order_id,order_date,category,price,rating,review_date\n\
             o1,2023-01-02,toys,10.0,5,2023-01-03\n\
             o2,not-a-date,toys,10.0,5,2023-01-03\n",
        );

        match load_csv(file.path()) {
            Err(LoadError::InvalidDate { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "order_date");
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }
}
