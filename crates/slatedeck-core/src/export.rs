//! Export collaborator contract.
//!
//! Exporters are read-only consumers of the document model. The engine
//! defines the seam and ships no real encoder; PDF/PPTX/PNG generation
//! belongs to the surrounding product.

use crate::document::Presentation;
use crate::storage::BoxFuture;
use std::fmt;
use thiserror::Error;

/// Target formats offered by the export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Pptx,
    Png,
}

impl ExportFormat {
    pub fn all() -> [ExportFormat; 3] {
        [ExportFormat::Pdf, ExportFormat::Pptx, ExportFormat::Png]
    }

    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Pptx => "pptx",
            ExportFormat::Png => "png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export format not supported: {0}")]
    Unsupported(ExportFormat),
    #[error("export failed: {0}")]
    Other(String),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// A pluggable export backend. Implementations must never mutate the
/// presentation; failures are reported to the user and leave the in-memory
/// document untouched.
pub trait Exporter: Send + Sync {
    /// Render the presentation into the requested format.
    fn export(
        &self,
        presentation: &Presentation,
        format: ExportFormat,
    ) -> BoxFuture<'_, ExportResult<Vec<u8>>>;
}

/// Placeholder backend used until a real exporter is wired in: rejects
/// every format as unsupported.
#[derive(Debug, Default)]
pub struct NullExporter;

impl Exporter for NullExporter {
    fn export(
        &self,
        _presentation: &Presentation,
        format: ExportFormat,
    ) -> BoxFuture<'_, ExportResult<Vec<u8>>> {
        Box::pin(async move { Err(ExportError::Unsupported(format)) })
    }
}
