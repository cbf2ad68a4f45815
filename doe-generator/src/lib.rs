//! # doe-generator
//!
//! The DOE Workspace Generator: resolves an agent type from the catalog,
//! plans the directive/script/package sets, copies corpus files, renders
//! the workspace documents, and reports a manifest of what was actually
//! included or omitted.
//!
//! Call [`generate`] once per workspace. Side effects are filesystem
//! writes only; there are no network calls anywhere in this crate.

pub mod error;
pub mod plan;
pub mod slug;
pub mod writer;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doe_core::catalog::Catalog;
use doe_core::types::WorkspaceRequest;
use doe_renderer::{Renderer, TemplateContext};

pub use error::GenerateError;
pub use plan::WorkspacePlan;

use crate::error::io_err;

/// Manifest of one generated workspace. Ownership of the directory passes
/// entirely to the caller; the generator keeps no state after returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWorkspace {
    /// Absolute or caller-relative path of the new workspace directory.
    pub path: PathBuf,
    pub slug: String,
    pub agent_type: String,
    /// Directives actually copied into `directives/`.
    pub directives: Vec<String>,
    /// Requested directives whose source file was absent.
    pub missing_directives: Vec<String>,
    /// Scripts actually copied into `execution/`.
    pub scripts: Vec<String>,
    /// Requested scripts whose source file was absent.
    pub missing_scripts: Vec<String>,
    pub env_keys: Vec<String>,
    pub packages: Vec<String>,
    /// Workspace-relative paths of the rendered documents.
    pub rendered: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedWorkspace {
    /// True when every requested source file was found.
    pub fn is_complete(&self) -> bool {
        self.missing_directives.is_empty() && self.missing_scripts.is_empty()
    }
}

/// Generate a workspace under `output_root` from files in `source_root`.
///
/// `source_root` must contain the framework's `directives/` and
/// `execution/` corpus directories. The target directory is
/// `output_root/<slug>`, suffixed on collision — an existing workspace is
/// never overwritten or merged into.
///
/// Unknown agent types fail before anything is written. Missing corpus
/// files are non-fatal and appear in the manifest. A filesystem write
/// failure mid-generation is fatal and may leave a partial workspace on
/// disk for the caller to clean up.
pub fn generate(
    catalog: &Catalog,
    request: &WorkspaceRequest,
    source_root: &Path,
    output_root: &Path,
) -> Result<GeneratedWorkspace, GenerateError> {
    generate_with_templates(catalog, request, source_root, output_root, None)
}

/// Like [`generate`], with document templates overridable by `.tera` files
/// under `template_dir`.
pub fn generate_with_templates(
    catalog: &Catalog,
    request: &WorkspaceRequest,
    source_root: &Path,
    output_root: &Path,
    template_dir: Option<&Path>,
) -> Result<GeneratedWorkspace, GenerateError> {
    // Resolve first: UnknownAgentType must abort with zero side effects.
    let template = catalog.resolve(&request.agent_type)?;
    let plan = WorkspacePlan::build(template, request);

    let slug = slug::slugify(&request.name.0);
    let workspace = slug::unique_workspace_dir(output_root, &slug);
    tracing::info!("generating workspace at {}", workspace.display());

    for sub in ["directives", "execution", ".tmp"] {
        let dir = workspace.join(sub);
        std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
    }

    let (directives, missing_directives) = writer::copy_corpus_files(
        &source_root.join("directives"),
        &workspace.join("directives"),
        &plan.directives,
    )?;
    let (scripts, missing_scripts) = writer::copy_corpus_files(
        &source_root.join("execution"),
        &workspace.join("execution"),
        &plan.scripts,
    )?;

    let ctx = TemplateContext::new(
        &request.name.0,
        &slug,
        template,
        directives.clone(),
        scripts.clone(),
        plan.packages.clone(),
    );
    let renderer = match template_dir {
        Some(dir) => Renderer::with_overrides(dir)?,
        None => Renderer::new()?,
    };
    let mut rendered = Vec::new();
    for (rel_path, content) in renderer.render_workspace(&ctx)? {
        let path = workspace.join(&rel_path);
        writer::atomic_write(&path, &content)?;
        if rel_path.extension().and_then(|e| e.to_str()) == Some("sh") {
            writer::make_executable(&path)?;
        }
        rendered.push(rel_path.display().to_string());
    }

    Ok(GeneratedWorkspace {
        path: workspace,
        slug,
        agent_type: template.name.0.clone(),
        directives,
        missing_directives,
        scripts,
        missing_scripts,
        env_keys: template.env_keys.clone(),
        packages: plan.packages,
        rendered,
        generated_at: ctx.generated_at,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use doe_core::types::AgentTypeName;
    use tempfile::TempDir;

    fn empty_roots() -> (TempDir, TempDir) {
        (TempDir::new().unwrap(), TempDir::new().unwrap())
    }

    #[test]
    fn unknown_type_writes_nothing() {
        let (source, output) = empty_roots();
        let catalog = Catalog::new();
        let request = WorkspaceRequest::new("Ghost", "not_a_type");
        let err = generate(&catalog, &request, source.path(), output.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Catalog(_)), "got: {err}");
        let entries: Vec<_> = std::fs::read_dir(output.path()).unwrap().collect();
        assert!(entries.is_empty(), "output root must stay untouched");
    }

    #[test]
    fn manifest_reports_missing_sources_without_failing() {
        let (source, output) = empty_roots();
        let catalog = Catalog::new();
        let request = WorkspaceRequest::new("Sparse Bot", "crm_integration");
        let manifest = generate(&catalog, &request, source.path(), output.path()).unwrap();
        assert!(!manifest.is_complete());
        assert_eq!(manifest.missing_scripts.len(), 2, "empty corpus: all missing");
        assert!(manifest.scripts.is_empty());
        assert!(manifest.path.join("AGENTS.md").exists(), "docs still rendered");
    }

    #[test]
    fn manifest_agent_type_matches_resolved_template() {
        let (source, output) = empty_roots();
        let catalog = Catalog::new();
        let request = WorkspaceRequest::new("X", "full_stack");
        let manifest = generate(&catalog, &request, source.path(), output.path()).unwrap();
        assert_eq!(manifest.agent_type, "full_stack");
        let full = catalog
            .resolve(&AgentTypeName::from("full_stack"))
            .unwrap();
        assert_eq!(manifest.packages, full.packages);
    }
}
