use super::{position_of, DataStore};
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the collection would have been written out.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn list_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn find_record(&self, id: &str) -> Result<Option<Record>> {
        Ok(position_of(&self.records, id).map(|i| self.records[i].clone()))
    }

    fn append_record(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        self.writes += 1;
        Ok(())
    }

    fn remove_record(&mut self, id: &str) -> Result<Option<Record>> {
        let Some(index) = position_of(&self.records, id) else {
            return Ok(None);
        };
        let removed = self.records.remove(index);
        self.writes += 1;
        Ok(Some(removed))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

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

        /// Seed `count` records with ids "1".."count".
        pub fn with_records(mut self, count: usize) -> Self {
            for i in 1..=count {
                self.store.records.push(Record::new(
                    i.to_string(),
                    format!("user{}@example.com", i),
                    20 + i as i64,
                ));
            }
            self
        }

        /// Seed one record verbatim, duplicates included.
        pub fn with_record(mut self, record: Record) -> Self {
            self.store.records.push(record);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
