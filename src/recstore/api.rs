//! # API Facade
//!
//! [`perform`] is the single entry point for one invocation: it takes the
//! immutable [`Arguments`], opens the record file, resolves the request,
//! runs the matching command and renders the outcome onto a writer.
//!
//! [`RecordApi`] is the thin facade in between. It is generic over
//! [`DataStore`] so the dispatch can be exercised against an
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) without touching
//! the filesystem.
//!
//! ## Check Order
//!
//! The file name is checked first, then the file is opened and decoded, and
//! only then is the operation looked at. A bad operation against a missing
//! file therefore still leaves an empty file behind, but never changes the
//! contents of an existing one.

use crate::commands::{self, CmdResult};
use crate::config::{Arguments, Request};
use crate::error::Result;
use crate::model::Record;
use crate::output;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::io::Write;
use tracing::debug;

/// The main API facade for record operations.
pub struct RecordApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> RecordApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add(&mut self, item: Record) -> Result<CmdResult> {
        commands::add::run(&mut self.store, item)
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn find_by_id(&self, id: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn dispatch(&mut self, request: Request) -> Result<CmdResult> {
        match request {
            Request::List => self.list(),
            Request::Add(item) => self.add(item),
            Request::Remove(id) => self.remove(&id),
            Request::FindById(id) => self.find_by_id(&id),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Run one operation described by `args`, writing its output to `writer`.
pub fn perform<W: Write>(args: &Arguments, writer: &mut W) -> Result<()> {
    let path = args.file_name()?;
    let store = FileStore::open(path)?;

    let request = args.request()?;
    let operation = request.operation();
    debug!(%operation, path = %path.display(), "dispatching");

    let mut api = RecordApi::new(store);
    let result = api.dispatch(request)?;
    output::render(operation, &result, writer)
}
