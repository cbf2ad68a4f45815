//! Error types for doe-generator.

use std::path::PathBuf;

use thiserror::Error;

use doe_core::error::CatalogError;
use doe_renderer::RenderError;

/// All errors that can arise from workspace generation.
///
/// Missing source files for requested directives/scripts are **not**
/// errors — they are recorded in the returned manifest.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested agent type is unknown. Nothing has been written.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context. A partially
    /// generated workspace may be left on disk.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenerateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.into(),
        source,
    }
}
