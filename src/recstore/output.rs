//! Renders command results as the text written to the caller.
//!
//! Output is compact JSON or a plain message, never both, with no trailing
//! newline: the binary adds that once, after a successful operation.

use crate::commands::CmdResult;
use crate::config::Operation;
use crate::error::{RecstoreError, Result};
use std::io::Write;

pub fn render<W: Write>(operation: Operation, result: &CmdResult, writer: &mut W) -> Result<()> {
    match operation {
        Operation::List if !result.listed_records.is_empty() => {
            serde_json::to_writer(&mut *writer, &result.listed_records)
                .map_err(RecstoreError::Encode)?;
        }
        Operation::FindById => {
            if let Some(record) = result.listed_records.first() {
                serde_json::to_writer(&mut *writer, record).map_err(RecstoreError::Encode)?;
            }
        }
        _ => {}
    }

    writer
        .write_all(result.messages.join("\n").as_bytes())
        .map_err(RecstoreError::Io)?;
    Ok(())
}
