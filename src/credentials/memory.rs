//! In-process credential target

use super::{StoredCredential, SyncTarget};
use crate::utils::error::AppResult;
use std::sync::{PoisonError, RwLock};

/// Keeps the credential in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    credential: RwLock<Option<StoredCredential>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a credential already present
    pub fn with_credential(credential: StoredCredential) -> Self {
        Self {
            credential: RwLock::new(Some(credential)),
        }
    }
}

impl SyncTarget for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write(&self, credential: &StoredCredential) -> AppResult<()> {
        *self.credential.write().unwrap_or_else(PoisonError::into_inner) = Some(credential.clone());
        Ok(())
    }

    fn erase(&self) -> AppResult<()> {
        *self.credential.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }

    fn load(&self) -> AppResult<Option<StoredCredential>> {
        Ok(self
            .credential
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
