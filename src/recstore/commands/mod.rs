use crate::model::Record;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// Outcome of a single command.
///
/// `listed_records` is what a query wants shown, `affected_records` is what a
/// mutation changed, and `messages` carry the expected-but-unsuccessful cases
/// ("already exists", "not found") that are not errors.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub affected_records: Vec<Record>,
    pub messages: Vec<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }
}
