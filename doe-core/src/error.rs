//! Error types for doe-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested agent type is not in the fixed catalog. Fatal: the
    /// generator writes nothing to disk when this is returned.
    #[error("unknown agent type '{requested}'; valid types: {valid}")]
    UnknownAgentType { requested: String, valid: String },
}

/// All errors that can arise from webhook-map loading.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Underlying I/O failure reading the map file.
    #[error("cannot read webhook map at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error on load — includes the file path for context.
    #[error("failed to parse webhook map at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
