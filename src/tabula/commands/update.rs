use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Draft, RecordId};
use crate::store::DataStore;
use crate::validation::validate;

/// Replaces a record's fields in place. The id and position never change.
pub fn run<S: DataStore>(store: &mut S, id: RecordId, draft: &Draft) -> Result<CmdResult> {
    let fields = validate(draft)?;
    let mut record = store.get(id)?;
    record.apply(fields);
    store.replace(record.clone())?;
    tracing::info!(id = %id, name = %record.name, "record updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated: {}",
        record.name
    )));
    result.affected_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_in_place_keeping_id() {
        let mut fx = StoreFixture::new().with_sample();
        let ids = fx.ids();

        run(
            &mut fx.store,
            RecordId(2),
            &Draft::new("Павел", "2025-07-01", "12.5"),
        )
        .unwrap();

        let records = fx.store.records();
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
        assert_eq!(records[1].name, "Павел");
        assert_eq!(records[1].iso_date(), "2025-07-01");
        assert_eq!(records[1].value, 12.5);
        assert_eq!(records[0].name, "Иван Иванов");
        assert_eq!(records[2].name, "Сидор Сидоров");
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut fx = StoreFixture::new().with_sample();
        let err = run(&mut fx.store, RecordId(42), &Draft::new("X", "2025-01-01", "1"))
            .unwrap_err();
        assert!(matches!(err, TableError::NotFound(RecordId(42))));
    }

    #[test]
    fn invalid_draft_leaves_record_untouched() {
        let mut fx = StoreFixture::new().with_sample();
        let before = fx.store.records();

        let err = run(&mut fx.store, RecordId(1), &Draft::new("Иван", "", "78")).unwrap_err();
        assert!(matches!(err, TableError::Validation(_)));
        assert_eq!(fx.store.records(), before);
    }
}
