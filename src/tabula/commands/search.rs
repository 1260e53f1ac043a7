//! # Free-text search
//!
//! A query matches a row when any of its fields contains the query,
//! case-insensitively. Each column type is matched against the forms a user
//! would actually type:
//!
//! - **id**: its decimal digits, as shown in the table.
//! - **text**: the lowercased value.
//! - **number**: its decimal rendering (`78`, `12.5`).
//! - **date**: every rendering the table offers, so `15.05`, `2025-05`, and
//!   `5.2025` all find 2025-05-15:
//!
//! ```text
//! DD.MM.YYYY   15.05.2025
//! YYYY-MM-DD   2025-05-15
//! D.M.YYYY     15.5.2025
//! ```
//!
//! A missing value never matches and never fails the search. The empty query
//! matches every row. Result order is input order.

use crate::model::{format_value, Record, RecordId, DISPLAY_DATE, ISO_DATE, SHORT_DATE};
use chrono::NaiveDate;

const DATE_RENDERINGS: [&str; 3] = [DISPLAY_DATE, ISO_DATE, SHORT_DATE];

/// A single cell as seen by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Id(RecordId),
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

/// Anything that can be filtered: exposes its searchable cells.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<FieldValue<'_>>>;
}

impl Searchable for Record {
    fn search_fields(&self) -> Vec<Option<FieldValue<'_>>> {
        vec![
            Some(FieldValue::Id(self.id)),
            Some(FieldValue::Text(&self.name)),
            Some(FieldValue::Date(self.date)),
            Some(FieldValue::Number(self.value)),
        ]
    }
}

pub fn field_matches(value: FieldValue<'_>, needle: &str) -> bool {
    match value {
        FieldValue::Id(id) => id.to_string().contains(needle),
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        FieldValue::Number(n) => format_value(n).contains(needle),
        FieldValue::Date(date) => DATE_RENDERINGS
            .iter()
            .any(|fmt| date.format(fmt).to_string().to_lowercase().contains(needle)),
    }
}

pub fn matches<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowered(item, &needle)
}

fn matches_lowered<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .into_iter()
        .flatten()
        .any(|value| field_matches(value, needle))
}

/// Keeps the items matching `query`, preserving order.
pub fn filter<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.to_lowercase();
    let hits: Vec<T> = items
        .iter()
        .filter(|item| matches_lowered(*item, &needle))
        .cloned()
        .collect();
    tracing::debug!(query = %query, total = items.len(), hits = hits.len(), "filtered records");
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn sample() -> Vec<Record> {
        StoreFixture::new().with_sample().store.records()
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let records = sample();
        assert_eq!(filter(&records, ""), records);
    }

    #[test]
    fn matches_any_date_rendering() {
        let records = sample();
        assert_eq!(names(&filter(&records, "15.05")), vec!["Иван Иванов"]);
        assert_eq!(names(&filter(&records, "2025-05")), vec!["Иван Иванов"]);
        assert_eq!(names(&filter(&records, "15.5.2025")), vec!["Иван Иванов"]);
        assert!(filter(&records, "2025-07").is_empty());
    }

    #[test]
    fn unpadded_rendering_matches_month_and_year() {
        let records = sample();
        assert_eq!(names(&filter(&records, "5.2025")), vec!["Иван Иванов"]);
        assert_eq!(names(&filter(&records, "4.2025")), vec!["Сидор Сидоров"]);
    }

    #[test]
    fn excludes_other_months() {
        let fx = StoreFixture::new().with_record("A", "2025-05-15", 1.0);
        let records = fx.store.records();
        assert_eq!(filter(&records, "2025-05").len(), 1);
        assert!(filter(&records, "2025-06").is_empty());
    }

    #[test]
    fn matches_numbers_by_decimal_rendering() {
        let fx = StoreFixture::new().with_record("A", "2020-01-01", 99.0);
        let records = fx.store.records();
        assert_eq!(filter(&records, "9").len(), 1);
        assert!(filter(&records, "100").is_empty());
        assert!(filter(&records, "99.0").is_empty());
    }

    #[test]
    fn matches_text_case_insensitively() {
        let records = sample();
        assert_eq!(names(&filter(&records, "ПЕТР")), vec!["Петр Петров"]);
        assert_eq!(names(&filter(&records, "ов")).len(), 3);
    }

    #[test]
    fn value_query_selects_only_matching_row() {
        let records = sample();
        assert_eq!(names(&filter(&records, "98")), vec!["Сидор Сидоров"]);
    }

    #[test]
    fn matches_record_ids() {
        let fx = StoreFixture::new()
            .with_record("A", "2030-02-02", 5.0)
            .with_record("B", "2030-02-02", 5.0);
        let records = fx.store.records();
        assert_eq!(names(&filter(&records, "1")), vec!["A"]);
        assert_eq!(names(&filter(&records, "2")).len(), 2);
    }

    struct Partial {
        name: Option<String>,
        value: Option<f64>,
    }

    impl Searchable for Partial {
        fn search_fields(&self) -> Vec<Option<FieldValue<'_>>> {
            vec![
                self.name.as_deref().map(FieldValue::Text),
                None,
                self.value.map(FieldValue::Number),
            ]
        }
    }

    #[test]
    fn missing_fields_are_skipped() {
        let row = Partial {
            name: None,
            value: Some(42.0),
        };
        assert!(matches(&row, "42"));
        assert!(!matches(&row, "x"));
        assert!(matches(&row, ""));

        let empty = Partial {
            name: None,
            value: None,
        };
        assert!(!matches(&empty, "4"));
    }
}
