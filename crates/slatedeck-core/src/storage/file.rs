//! JSON-file storage backend.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::Presentation;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores presentations as pretty-printed JSON files in one directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the given directory, creating it if
    /// needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("failed to create storage directory: {e}"))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the platform data directory
    /// (`<data-dir>/slatedeck/presentations`).
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("could not determine a data directory".to_string()))?;
        Self::new(base.join("slatedeck").join("presentations"))
    }

    /// The directory presentations are stored in.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn presentation_path(&self, id: &str) -> PathBuf {
        // Sanitize the id so it is safe as a filename.
        let safe_id: String = id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{safe_id}.json"))
    }
}

impl Storage for FileStorage {
    fn save(&self, id: &str, presentation: &Presentation) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.presentation_path(id);
        let json = presentation.to_json();
        Box::pin(async move {
            let json = json.map_err(|e| StorageError::Serialization(e.to_string()))?;
            fs::write(&path, json)
                .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", path.display())))
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Presentation>> {
        let path = self.presentation_path(id);
        let id = id.to_string();
        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(id));
            }
            let json = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("failed to read {}: {e}", path.display())))?;
            Presentation::from_json(&json).map_err(|e| {
                StorageError::Serialization(format!("failed to parse {}: {e}", path.display()))
            })
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.presentation_path(id);
        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::Io(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        let base = self.base_path.clone();
        Box::pin(async move {
            if !base.exists() {
                return Ok(vec![]);
            }
            let entries = fs::read_dir(&base)
                .map_err(|e| StorageError::Io(format!("failed to read directory: {e}")))?;

            let mut ids = Vec::new();
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        ids.push(stem.to_string());
                    }
                }
            }
            Ok(ids)
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.presentation_path(id);
        Box::pin(async move { Ok(path.exists()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::block_on;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let presentation = Presentation::new("Board review");
        block_on(storage.save("board-review", &presentation)).unwrap();
        let loaded = block_on(storage.load("board-review")).unwrap();

        assert_eq!(presentation, loaded);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let result = block_on(storage.load("missing"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_list_only_json_files() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a deck").unwrap();

        let presentation = Presentation::new("Deck");
        block_on(storage.save("deck", &presentation)).unwrap();

        let ids = block_on(storage.list()).unwrap();
        assert_eq!(ids, vec!["deck".to_string()]);
    }

    #[test]
    fn test_delete_and_exists() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let presentation = Presentation::new("Deck");
        block_on(storage.save("deck", &presentation)).unwrap();
        assert!(block_on(storage.exists("deck")).unwrap());

        block_on(storage.delete("deck")).unwrap();
        assert!(!block_on(storage.exists("deck")).unwrap());
    }

    #[test]
    fn test_id_sanitization() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let presentation = Presentation::new("Deck");
        block_on(storage.save("q3/deck:draft", &presentation)).unwrap();
        let loaded = block_on(storage.load("q3/deck:draft")).unwrap();
        assert_eq!(loaded.id, presentation.id);
    }
}
