use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Removes the first record with `id`. Later records sharing the id stay.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove_record(id)? {
        Some(removed) => result.affected_records.push(removed),
        None => result.add_message(format!("Item with id {} not found", id)),
    }

    Ok(result)
}
