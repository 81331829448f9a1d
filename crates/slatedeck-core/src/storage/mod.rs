//! Persistence collaborator for presentations.
//!
//! The core never blocks on storage: saves and loads are async and driven
//! by the shell, and a failed save leaves the in-memory document untouched.

mod autosave;
mod file;
mod memory;

pub use autosave::{AutosaveManager, DEFAULT_AUTOSAVE_INTERVAL_SECS, LAST_DOCUMENT_KEY};
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::document::Presentation;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("presentation not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async collaborator operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for presentation storage backends.
///
/// Implementations can keep presentations in memory, on the filesystem, or
/// behind the surrounding product's document service.
pub trait Storage: Send + Sync {
    /// Save a presentation under an id.
    fn save(&self, id: &str, presentation: &Presentation) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a presentation by id.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Presentation>>;

    /// Delete a presentation.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all stored presentation ids.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check whether a presentation exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
