use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::DataStore;

/// Removes a record. Deleting an id that is already gone is an error, not a no-op.
pub fn run<S: DataStore>(store: &mut S, id: RecordId) -> Result<CmdResult> {
    let record = store.remove(id)?;
    tracing::info!(id = %id, name = %record.name, "record deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record deleted: {}",
        record.name
    )));
    result.affected_records.push(record);
    Ok(result)
}
