use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, item: Record) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.find_record(&item.id)?.is_some() {
        debug!(id = %item.id, "add skipped, id already present");
        result.add_message(format!("Item with id {} already exists", item.id));
        return Ok(result);
    }

    store.append_record(item.clone())?;
    Ok(result.with_affected_records(vec![item]))
}
