//! # Invocation Configuration
//!
//! Everything one invocation needs is captured up front in an immutable
//! [`Arguments`] value and handed to [`crate::api::perform`]. There is no
//! config file and no global state: the CLI builds `Arguments` from its flags,
//! tests and library callers build it with the `with_*` methods.
//!
//! Raw flag values stay as strings until the store has been opened, so the
//! checks run in a fixed order: file name, file contents, operation, then the
//! operation's own argument. [`Arguments::request`] performs the last three
//! and yields a typed [`Request`].

use crate::error::{RecstoreError, Result};
use crate::model::Record;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Names of the command-line flags, as the user types them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    FileName,
    Operation,
    Id,
    Item,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::FileName => "fileName",
            Flag::Operation => "operation",
            Flag::Id => "id",
            Flag::Item => "item",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Remove,
    FindById,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::FindById => "findById",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = RecstoreError;

    // Names are case-sensitive: `findbyid` is not `findById`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "remove" => Ok(Operation::Remove),
            "findById" => Ok(Operation::FindById),
            other => Err(RecstoreError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// A validated operation together with the argument it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Add(Record),
    Remove(String),
    FindById(String),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::List => Operation::List,
            Request::Add(_) => Operation::Add,
            Request::Remove(_) => Operation::Remove,
            Request::FindById(_) => Operation::FindById,
        }
    }
}

/// The full set of options for one invocation.
///
/// Empty strings are treated exactly like absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    file_name: Option<PathBuf>,
    operation: Option<String>,
    id: Option<String>,
    item: Option<String>,
}

impl Arguments {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self::default().with_file_name(file_name)
    }

    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        let path = file_name.into();
        self.file_name = (!path.as_os_str().is_empty()).then_some(path);
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = non_empty(operation.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = non_empty(id.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = non_empty(item.into());
        self
    }

    pub fn file_name(&self) -> Result<&Path> {
        self.file_name
            .as_deref()
            .ok_or(RecstoreError::MissingArgument(Flag::FileName))
    }

    /// Resolves the operation name and its argument into a [`Request`].
    pub fn request(&self) -> Result<Request> {
        let operation: Operation = self
            .operation
            .as_deref()
            .ok_or(RecstoreError::MissingArgument(Flag::Operation))?
            .parse()?;

        match operation {
            Operation::List => Ok(Request::List),
            Operation::Add => {
                let item = self
                    .item
                    .as_deref()
                    .ok_or(RecstoreError::MissingArgument(Flag::Item))?;
                let record: Record = serde_json::from_str(item).map_err(RecstoreError::Decode)?;
                Ok(Request::Add(record))
            }
            Operation::Remove => Ok(Request::Remove(self.require_id()?)),
            Operation::FindById => Ok(Request::FindById(self.require_id()?)),
        }
    }

    fn require_id(&self) -> Result<String> {
        self.id
            .clone()
            .ok_or(RecstoreError::MissingArgument(Flag::Id))
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
