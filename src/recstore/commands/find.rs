use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Looks up the first record with `id`. No match is an empty result, not a
/// message.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let found = store.find_record(id)?;
    Ok(CmdResult::default().with_listed_records(found.into_iter().collect()))
}
