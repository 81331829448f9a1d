//! In-memory storage backend.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::Presentation;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    presentations: RwLock<HashMap<String, Presentation>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, presentation: &Presentation) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let presentation = presentation.clone();
        Box::pin(async move {
            let mut store = self
                .presentations
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            store.insert(id, presentation);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Presentation>> {
        let id = id.to_string();
        Box::pin(async move {
            let store = self
                .presentations
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            store.get(&id).cloned().ok_or(StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut store = self
                .presentations
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            store.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let store = self
                .presentations
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            Ok(store.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let store = self
                .presentations
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            Ok(store.contains_key(&id))
        })
    }
}
