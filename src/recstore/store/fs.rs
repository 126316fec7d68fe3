use super::{position_of, DataStore};
use crate::error::{RecstoreError, Result};
use crate::model::Record;
use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A record collection backed by one JSON array file.
///
/// The file is read once in [`FileStore::open`]; the handle used for that read
/// does not outlive the call. Mutations rewrite the whole file in place, with
/// no temp-file swap, so a crash mid-write can truncate it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl FileStore {
    /// Open `path` for reading and writing, creating it empty if absent, and
    /// decode its contents. A zero-length file is an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = read_or_create(&path)?;

        let records = if bytes.is_empty() {
            Vec::new()
        } else {
            serde_json::from_slice(&bytes).map_err(RecstoreError::Decode)?
        };
        debug!(path = %path.display(), count = records.len(), "loaded records");

        Ok(Self { path, records })
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_vec(&self.records).map_err(RecstoreError::Encode)?;
        fs::write(&self.path, content).map_err(RecstoreError::Io)?;
        info!(path = %self.path.display(), count = self.records.len(), "rewrote record file");
        Ok(())
    }
}

fn read_or_create(path: &Path) -> Result<Vec<u8>> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(RecstoreError::Io)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(RecstoreError::Io)?;
    Ok(bytes)
}

impl DataStore for FileStore {
    fn list_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn find_record(&self, id: &str) -> Result<Option<Record>> {
        Ok(position_of(&self.records, id).map(|i| self.records[i].clone()))
    }

    fn append_record(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    fn remove_record(&mut self, id: &str) -> Result<Option<Record>> {
        let Some(index) = position_of(&self.records, id) else {
            return Ok(None);
        };
        let removed = self.records.remove(index);
        self.save()?;
        Ok(Some(removed))
    }
}
