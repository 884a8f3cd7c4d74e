//! Persistent credential target
//!
//! A small JSON key/value file; the credential lives under one key so the
//! file can hold other client state alongside it.

use super::{StoredCredential, SyncTarget};
use crate::utils::error::{AppResult, ErrorContext};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// JSON file store keyed by name
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> AppResult<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e).storage_context("Failed to read credential file"),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(entries),
            _ => {
                warn!("Ignoring malformed credential file {:?}", self.path);
                Ok(Map::new())
            }
        }
    }

    fn write_entries(&self, entries: Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).storage_context("Failed to create credential directory")?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(entries))
            .storage_context("Failed to serialize credentials")?;
        fs::write(&self.path, content).storage_context("Failed to write credential file")
    }
}

impl SyncTarget for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write(&self, credential: &StoredCredential) -> AppResult<()> {
        let mut entries = self.read_entries()?;
        let value = serde_json::to_value(credential).storage_context("Failed to serialize credential")?;
        entries.insert(self.key.clone(), value);
        self.write_entries(entries)?;
        debug!("Credential written to {:?}", self.path);
        Ok(())
    }

    fn erase(&self) -> AppResult<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(&self.key).is_none() {
            return Ok(());
        }
        self.write_entries(entries)
    }

    fn load(&self) -> AppResult<Option<StoredCredential>> {
        let entries = self.read_entries()?;
        match entries.get(&self.key) {
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(credential) => Ok(Some(credential)),
                Err(e) => {
                    warn!("Ignoring malformed credential entry: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }
}
