//! Periodic autosave on top of a storage backend.
//!
//! The shell marks the manager dirty after edits and ticks `maybe_save`;
//! saves happen at most once per interval and explicit saves (Ctrl+S) go
//! through `save` directly.

use super::{Storage, StorageResult};
use crate::document::Presentation;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default autosave interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Storage key of the most recently saved presentation, used for restore.
pub const LAST_DOCUMENT_KEY: &str = "__last_presentation__";

/// Tracks dirty state and drives interval-based saves.
pub struct AutosaveManager<S: Storage> {
    storage: Arc<S>,
    interval: Duration,
    last_save: Option<Instant>,
    dirty: bool,
}

impl<S: Storage> AutosaveManager<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            interval: Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS),
            last_save: None,
            dirty: false,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Mark the presentation as having unsaved changes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether an autosave is due: dirty and either never saved or past the
    /// interval.
    pub fn should_save(&self) -> bool {
        if !self.dirty {
            return false;
        }
        match self.last_save {
            Some(last) => last.elapsed() >= self.interval,
            None => true,
        }
    }

    /// Save if due. Returns true when a save was performed.
    pub async fn maybe_save(&mut self, presentation: &Presentation) -> StorageResult<bool> {
        if !self.should_save() {
            return Ok(false);
        }
        self.save(presentation).await?;
        Ok(true)
    }

    /// Save immediately, keyed by the presentation id and mirrored under the
    /// last-document key for restore on next launch.
    pub async fn save(&mut self, presentation: &Presentation) -> StorageResult<()> {
        let id = presentation.id.to_string();
        self.storage.save(&id, presentation).await?;
        self.storage.save(LAST_DOCUMENT_KEY, presentation).await?;
        self.last_save = Some(Instant::now());
        self.dirty = false;
        log::debug!("saved presentation {id}");
        Ok(())
    }

    /// Load a presentation by id.
    pub async fn load(&mut self, id: &str) -> StorageResult<Presentation> {
        let presentation = self.storage.load(id).await?;
        self.dirty = false;
        self.last_save = Some(Instant::now());
        Ok(presentation)
    }

    /// Restore the most recently saved presentation, if any.
    pub async fn load_last(&mut self) -> Option<Presentation> {
        match self.storage.load(LAST_DOCUMENT_KEY).await {
            Ok(presentation) => {
                self.dirty = false;
                self.last_save = Some(Instant::now());
                Some(presentation)
            }
            Err(_) => None,
        }
    }

    /// List stored presentation ids, hiding the restore key.
    pub async fn list_presentations(&self) -> StorageResult<Vec<String>> {
        let mut ids = self.storage.list().await?;
        ids.retain(|id| id != LAST_DOCUMENT_KEY);
        Ok(ids)
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::storage::tests::block_on;

    #[test]
    fn test_clean_manager_does_not_save() {
        let manager = AutosaveManager::new(Arc::new(MemoryStorage::new()));
        assert!(!manager.is_dirty());
        assert!(!manager.should_save());
    }

    #[test]
    fn test_dirty_with_no_previous_save_is_due() {
        let mut manager = AutosaveManager::new(Arc::new(MemoryStorage::new()));
        manager.mark_dirty();
        assert!(manager.should_save());
    }

    #[test]
    fn test_save_clears_dirty_and_respects_interval() {
        let mut manager = AutosaveManager::new(Arc::new(MemoryStorage::new()));
        let presentation = Presentation::new("Deck");

        manager.mark_dirty();
        block_on(manager.save(&presentation)).unwrap();
        assert!(!manager.is_dirty());

        // Dirty again right away: the interval has not elapsed.
        manager.mark_dirty();
        assert!(!manager.should_save());
        let saved = block_on(manager.maybe_save(&presentation)).unwrap();
        assert!(!saved);

        manager.set_interval(Duration::ZERO);
        assert!(manager.should_save());
        let saved = block_on(manager.maybe_save(&presentation)).unwrap();
        assert!(saved);
    }

    #[test]
    fn test_load_last_restores_saved_presentation() {
        let storage = Arc::new(MemoryStorage::new());
        let mut manager = AutosaveManager::new(storage.clone());

        let presentation = Presentation::new("Quarterly review");
        manager.mark_dirty();
        block_on(manager.save(&presentation)).unwrap();

        let mut fresh = AutosaveManager::new(storage);
        let restored = block_on(fresh.load_last()).expect("last presentation restored");
        assert_eq!(restored.title, "Quarterly review");
    }

    #[test]
    fn test_list_hides_restore_key() {
        let mut manager = AutosaveManager::new(Arc::new(MemoryStorage::new()));
        let presentation = Presentation::new("Deck");
        manager.mark_dirty();
        block_on(manager.save(&presentation)).unwrap();

        let ids = block_on(manager.list_presentations()).unwrap();
        assert_eq!(ids, vec![presentation.id.to_string()]);
        assert!(!ids.contains(&LAST_DOCUMENT_KEY.to_string()));
    }
}
