use super::DataStore;
use crate::error::{Result, TableError};
use crate::model::{Record, RecordId};

/// Session-scoped storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    last_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn allocate_id(&mut self) -> RecordId {
        self.last_id += 1;
        RecordId(self.last_id)
    }

    fn insert(&mut self, record: Record) -> Result<()> {
        if self.position(record.id).is_some() {
            return Err(TableError::Store(format!(
                "record {} already exists",
                record.id
            )));
        }
        // Keep the counter ahead of ids that were assigned elsewhere.
        self.last_id = self.last_id.max(record.id.0);
        self.records.push(record);
        Ok(())
    }

    fn get(&self, id: RecordId) -> Result<Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(TableError::NotFound(id))
    }

    fn replace(&mut self, record: Record) -> Result<()> {
        let idx = self
            .position(record.id)
            .ok_or(TableError::NotFound(record.id))?;
        self.records[idx] = record;
        Ok(())
    }

    fn remove(&mut self, id: RecordId) -> Result<Record> {
        let idx = self.position(id).ok_or(TableError::NotFound(id))?;
        Ok(self.records.remove(idx))
    }

    fn records(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RecordFields;
    use chrono::NaiveDate;

    pub fn fields(name: &str, date: &str, value: f64) -> RecordFields {
        RecordFields {
            name: name.to_string(),
            date: NaiveDate::parse_from_str(date, crate::model::ISO_DATE).unwrap(),
            value,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_record(mut self, name: &str, date: &str, value: f64) -> Self {
            let id = self.store.allocate_id();
            let record = Record::new(id, fields(name, date, value));
            self.store.insert(record).unwrap();
            self
        }

        /// The three rows the table ships with.
        pub fn with_sample(self) -> Self {
            crate::commands::sample_fields()
                .into_iter()
                .fold(self, |fx, f| {
                    let date = f.date.format(crate::model::ISO_DATE).to_string();
                    fx.with_record(&f.name, &date, f.value)
                })
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let day = (i % 28) + 1;
                self = self.with_record(
                    &format!("Record {}", i + 1),
                    &format!("2025-01-{:02}", day),
                    i as f64,
                );
            }
            self
        }

        pub fn ids(&self) -> Vec<RecordId> {
            self.store.records().iter().map(|r| r.id).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{fields, StoreFixture};
    use super::*;

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut fx = StoreFixture::new().with_records(3);
        let last = fx.store.remove(RecordId(3)).unwrap();
        assert_eq!(last.id, RecordId(3));

        let next = fx.store.allocate_id();
        assert_eq!(next, RecordId(4));
    }

    #[test]
    fn replace_keeps_position() {
        let mut fx = StoreFixture::new().with_records(3);
        let mut middle = fx.store.get(RecordId(2)).unwrap();
        middle.apply(fields("Changed", "2024-12-31", 1.0));
        fx.store.replace(middle).unwrap();

        let names: Vec<_> = fx.store.records().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Record 1", "Changed", "Record 3"]);
    }

    #[test]
    fn missing_ids_report_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.get(RecordId(1)),
            Err(TableError::NotFound(RecordId(1)))
        ));
        assert!(matches!(
            store.remove(RecordId(1)),
            Err(TableError::NotFound(_))
        ));
        let ghost = Record::new(RecordId(9), fields("Ghost", "2025-01-01", 0.0));
        assert!(matches!(store.replace(ghost), Err(TableError::NotFound(_))));
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut fx = StoreFixture::new().with_records(1);
        let dup = Record::new(RecordId(1), fields("Dup", "2025-01-01", 0.0));
        assert!(fx.store.insert(dup).is_err());
        assert_eq!(fx.store.len(), 1);
    }

    #[test]
    fn counter_moves_past_externally_assigned_ids() {
        let mut store = InMemoryStore::new();
        let rec = Record::new(RecordId(10), fields("Ten", "2025-01-01", 10.0));
        store.insert(rec).unwrap();
        assert_eq!(store.allocate_id(), RecordId(11));
    }
}
