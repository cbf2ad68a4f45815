//! DOE core library — domain types, agent-type catalog, webhook map, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`catalog`] — the fixed [`Catalog`] template store
//! - [`webhook`] — webhook slug → directive mapping document
//! - [`error`] — [`CatalogError`], [`WebhookError`]

pub mod catalog;
pub mod error;
pub mod types;
pub mod webhook;

pub use catalog::Catalog;
pub use error::{CatalogError, WebhookError};
pub use types::{AgentTypeName, AgentTypeTemplate, WorkspaceName, WorkspaceRequest};
pub use webhook::{WebhookMap, WebhookRoute};
