use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Draft, Record};
use crate::store::DataStore;
use crate::validation::validate;

/// Validates the draft and appends a new record with a fresh id.
pub fn run<S: DataStore>(store: &mut S, draft: &Draft) -> Result<CmdResult> {
    let fields = validate(draft)?;
    let record = Record::new(store.allocate_id(), fields);
    store.insert(record.clone())?;
    tracing::info!(id = %record.id, name = %record.name, "record added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added: {}",
        record.name
    )));
    result.affected_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::model::{Field, RecordId};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_with_fresh_id() {
        let mut fx = StoreFixture::new().with_sample();
        let before = fx.ids();

        let result = run(&mut fx.store, &Draft::new("Анна", "01.02.2025", "5")).unwrap();
        let created = &result.affected_records[0];
        assert!(!before.contains(&created.id));

        let records = fx.store.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records.last().unwrap(), created);
        assert_eq!(created.iso_date(), "2025-02-01");
        assert_eq!(created.value, 5.0);
    }

    #[test]
    fn ids_stay_unique_after_deletions() {
        let mut fx = StoreFixture::new().with_sample();
        fx.store.remove(RecordId(1)).unwrap();

        let result = run(&mut fx.store, &Draft::new("New", "2025-01-01", "1")).unwrap();
        let id = result.affected_records[0].id;
        assert_eq!(id, RecordId(4));
        assert_eq!(
            fx.store.records().iter().filter(|r| r.id == id).count(),
            1
        );
    }

    #[test]
    fn rejects_incomplete_draft_without_mutating() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &Draft::new("", "2025-01-01", "1")).unwrap_err();
        match err {
            TableError::Validation(errors) => assert!(errors.contains(Field::Name)),
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn reports_success_message() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &Draft::new("Ann", "2025-01-01", "1")).unwrap();
        assert_eq!(result.messages[0].content, "Record added: Ann");
    }
}
