use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::RecordId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let records = store.records();
    tracing::debug!(count = records.len(), "listing records");
    Ok(CmdResult::default().with_listed_records(records))
}

pub fn get<S: DataStore>(store: &S, id: RecordId) -> Result<CmdResult> {
    let record = store.get(id)?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let fx = StoreFixture::new().with_sample();
        let result = run(&fx.store).unwrap();
        let ids: Vec<_> = result.listed_records.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn get_reports_missing_ids() {
        let fx = StoreFixture::new().with_sample();
        assert_eq!(get(&fx.store, RecordId(3)).unwrap().listed_records[0].value, 98.0);
        assert!(matches!(
            get(&fx.store, RecordId(4)),
            Err(TableError::NotFound(_))
        ));
    }
}
