//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing commands know about persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the whole collection lives in one JSON array file.
//!   It is read once when the store is opened and rewritten in full after
//!   every mutation.
//!
//! - [`memory::InMemoryStore`]: no persistence, counts writes so tests can
//!   assert that a command left the collection alone.
//!
//! ## Duplicate Identifiers
//!
//! A collection edited by hand may already hold several records with the
//! same id. Stores do not repair that: lookups and removals act on the first
//! match in insertion order and ignore the rest.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// All records, in insertion order.
    fn list_records(&self) -> Result<Vec<Record>>;

    /// The first record with the given id, if any.
    fn find_record(&self, id: &str) -> Result<Option<Record>>;

    /// Append a record to the end of the collection and persist it.
    fn append_record(&mut self, record: Record) -> Result<()>;

    /// Remove the first record with the given id and persist the remainder.
    ///
    /// Returns `None` without touching storage when no record matches.
    fn remove_record(&mut self, id: &str) -> Result<Option<Record>>;
}

/// Index of the first record whose id equals `id`.
pub(crate) fn position_of(records: &[Record], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id == id)
}
