//! Template context — serializable rendering payload for workspace documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doe_core::types::AgentTypeTemplate;

use crate::error::RenderError;

/// Rendering payload for one generated workspace.
///
/// Built from the resolved [`AgentTypeTemplate`] plus the *final* file lists
/// (template defaults unioned with extras, missing sources already removed)
/// so templates never re-derive set logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    /// Human-readable workspace name, e.g. `"My Lead Bot"`.
    pub agent_name: String,
    /// Filesystem slug the workspace directory was named after.
    pub slug: String,
    /// Catalog key, e.g. `lead_generation`.
    pub type_key: String,
    /// Display name, e.g. `"Lead Generation Agent"`.
    pub type_display_name: String,
    pub description: String,
    /// System-prompt specialization text for `AGENTS.md`.
    pub purpose: String,
    /// Directive filenames actually included in the workspace.
    pub directives: Vec<String>,
    /// Script filenames actually included in the workspace.
    pub scripts: Vec<String>,
    /// Required configuration keys for `.env.example`, de-duplicated.
    pub env_keys: Vec<String>,
    /// Final package list for `requirements.txt`.
    pub packages: Vec<String>,
    pub generator_version: String,
    pub generated_at: DateTime<Utc>,
}

impl TemplateContext {
    /// Build a context from a resolved template and the final file lists.
    pub fn new(
        agent_name: &str,
        slug: &str,
        template: &AgentTypeTemplate,
        directives: Vec<String>,
        scripts: Vec<String>,
        packages: Vec<String>,
    ) -> Self {
        TemplateContext {
            agent_name: agent_name.to_string(),
            slug: slug.to_string(),
            type_key: template.name.0.clone(),
            type_display_name: template.display_name.clone(),
            description: template.description.clone(),
            purpose: template.purpose.clone(),
            directives,
            scripts,
            env_keys: template.env_keys.clone(),
            packages,
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
