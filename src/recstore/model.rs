use serde::{Deserialize, Serialize};

/// A single user entry. Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}
