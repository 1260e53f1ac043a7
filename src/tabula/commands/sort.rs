//! Display ordering.
//!
//! Sorting always works on a copy: the store keeps insertion order no matter
//! how a view is ordered. `Vec::sort_by` is stable, so rows with equal keys
//! keep their relative store order in both directions.

use crate::model::{Field, Record};
use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

thread_local! {
    /// Root-locale collator, built once per thread from the compiled CLDR data.
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| tracing::warn!(error = %e, "name collation unavailable, using code point order"))
            .ok();
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: Field,
    pub order: SortOrder,
}

impl SortKey {
    pub fn ascending(field: Field) -> Self {
        Self {
            field,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: Field) -> Self {
        Self {
            field,
            order: SortOrder::Descending,
        }
    }

    /// The key after picking `field` as a column header: a new column starts
    /// ascending, the current one flips direction.
    pub fn select(current: Option<SortKey>, field: Field) -> Self {
        match current {
            Some(key) if key.field == field => Self {
                field,
                order: key.order.toggled(),
            },
            _ => Self::ascending(field),
        }
    }
}

pub fn compare(field: Field, a: &Record, b: &Record) -> Ordering {
    match field {
        Field::Name => compare_names(&a.name, &b.name),
        Field::Date => a.date.cmp(&b.date),
        Field::Value => a.value.total_cmp(&b.value),
    }
}

/// Locale-aware order: accented letters sort with their base letter (`É`
/// next to `E`, `Ё` next to `Е`) and case only breaks ties. Raw strings
/// settle anything the collator considers equal.
fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

pub fn sort_by(records: &[Record], key: SortKey) -> Vec<Record> {
    let mut view = records.to_vec();
    view.sort_by(|a, b| {
        let ord = compare(key.field, a, b);
        match key.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    tracing::debug!(field = %key.field, order = ?key.order, rows = view.len(), "sorted view");
    view
}
