//! Tera rendering engine — [`DocKind`] enum and [`Renderer`].
//!
//! # Document mapping
//!
//! | Document      | Output path (workspace-relative) |
//! |---------------|----------------------------------|
//! | Agents        | `AGENTS.md`                      |
//! | Readme        | `README.md`                      |
//! | EnvExample    | `.env.example`                   |
//! | Requirements  | `requirements.txt`               |
//! | Gitignore     | `.gitignore`                     |
//! | Setup         | `setup.sh`                       |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("workspace/agents.md.tera", include_str!("templates/agents.md.tera")),
    ("workspace/readme.md.tera", include_str!("templates/readme.md.tera")),
    ("workspace/env.example.tera", include_str!("templates/env.example.tera")),
    (
        "workspace/requirements.txt.tera",
        include_str!("templates/requirements.txt.tera"),
    ),
    ("workspace/gitignore.tera", include_str!("templates/gitignore.tera")),
    ("workspace/setup.sh.tera", include_str!("templates/setup.sh.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// DocKind
// ---------------------------------------------------------------------------

/// The rendered documents of a generated workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    Agents,
    Readme,
    EnvExample,
    Requirements,
    Gitignore,
    Setup,
}

impl DocKind {
    /// All document variants in a stable order.
    pub fn all() -> &'static [DocKind] {
        &[
            DocKind::Agents,
            DocKind::Readme,
            DocKind::EnvExample,
            DocKind::Requirements,
            DocKind::Gitignore,
            DocKind::Setup,
        ]
    }

    /// Template name to render for this document.
    pub fn template_name(&self) -> &'static str {
        match self {
            DocKind::Agents       => "workspace/agents.md.tera",
            DocKind::Readme       => "workspace/readme.md.tera",
            DocKind::EnvExample   => "workspace/env.example.tera",
            DocKind::Requirements => "workspace/requirements.txt.tera",
            DocKind::Gitignore    => "workspace/gitignore.tera",
            DocKind::Setup        => "workspace/setup.sh.tera",
        }
    }

    /// Output path for this document, relative to the workspace root.
    pub fn output_name(&self) -> &'static str {
        match self {
            DocKind::Agents       => "AGENTS.md",
            DocKind::Readme       => "README.md",
            DocKind::EnvExample   => ".env.example",
            DocKind::Requirements => "requirements.txt",
            DocKind::Gitignore    => ".gitignore",
            DocKind::Setup        => "setup.sh",
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering workspace documents with optional user
/// overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults. Template names are normalised to lowercase relative paths.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus
    /// any overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render a single document with the supplied context.
    pub fn render_doc(
        &self,
        ctx: &TemplateContext,
        doc: DocKind,
    ) -> Result<(PathBuf, String), RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(doc.template_name(), &tera_ctx)?;
        Ok((PathBuf::from(doc.output_name()), content))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renderer for the full workspace document set.
///
/// Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(None)? })
    }

    /// Construct a [`Renderer`] whose embedded templates may be overridden
    /// by `.tera` files under `user_template_dir`.
    pub fn with_overrides(user_template_dir: &Path) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(Some(user_template_dir))? })
    }

    /// Render every workspace document.
    ///
    /// Returns `Vec<(relative_path, rendered_content)>` — one entry per
    /// document, in [`DocKind::all`] order.
    pub fn render_workspace(
        &self,
        ctx: &TemplateContext,
    ) -> Result<Vec<(PathBuf, String)>, RenderError> {
        let mut results = Vec::with_capacity(DocKind::all().len());
        for doc in DocKind::all() {
            results.push(self.engine.render_doc(ctx, *doc)?);
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use doe_core::{catalog::Catalog, types::AgentTypeName};

    fn make_ctx(type_key: &str, name: &str) -> TemplateContext {
        let catalog = Catalog::new();
        let tpl = catalog.resolve(&AgentTypeName::from(type_key)).unwrap();
        TemplateContext::new(
            name,
            &name.to_lowercase().replace(' ', "-"),
            tpl,
            tpl.directives.clone(),
            tpl.scripts.clone(),
            tpl.packages.clone(),
        )
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn all_docs_render_and_mention_agent_name() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("lead_generation", "My Lead Bot");
        let results = renderer.render_workspace(&ctx).unwrap();
        assert_eq!(results.len(), DocKind::all().len());
        for (path, content) in &results {
            if path.to_str() == Some(".gitignore") {
                continue; // the ignore file carries no workspace identity
            }
            assert!(
                content.contains("My Lead Bot"),
                "{} should mention the agent name",
                path.display()
            );
        }
    }

    #[test]
    fn env_example_lists_every_key() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("lead_generation", "Lead Bot");
        let (_, content) = renderer
            .engine
            .render_doc(&ctx, DocKind::EnvExample)
            .unwrap();
        for key in ["APIFY_API_TOKEN", "GOOGLE_SHEETS_CREDENTIALS_FILE", "OPENAI_API_KEY"] {
            assert!(content.contains(&format!("{key}=")), "missing {key} in:\n{content}");
        }
    }

    #[test]
    fn env_example_empty_keys_has_placeholder() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("custom", "Blank");
        let (_, content) = renderer
            .engine
            .render_doc(&ctx, DocKind::EnvExample)
            .unwrap();
        assert!(content.contains("# Add your environment variables here"));
    }

    #[test]
    fn requirements_lists_every_package_once() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("crm_integration", "CRM Bot");
        let (_, content) = renderer
            .engine
            .render_doc(&ctx, DocKind::Requirements)
            .unwrap();
        let lines: Vec<&str> = content
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        assert_eq!(lines.len(), ctx.packages.len());
        for pkg in &ctx.packages {
            assert!(lines.contains(&pkg.as_str()), "missing package {pkg}");
        }
    }

    #[test]
    fn agents_doc_lists_directive_paths() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("freelance_proposals", "Proposal Bot");
        let (_, content) = renderer.engine.render_doc(&ctx, DocKind::Agents).unwrap();
        assert!(content.contains("`directives/freelance_proposals.md`"));
        assert!(content.contains("`execution/pandadoc_generator.py`"));
    }

    #[test]
    fn gitignore_excludes_secrets_and_tmp() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("custom", "X");
        let (_, content) = renderer.engine.render_doc(&ctx, DocKind::Gitignore).unwrap();
        for entry in [".env", "credentials.json", "token.json", ".tmp/"] {
            assert!(content.lines().any(|l| l == entry), "missing {entry}");
        }
    }

    #[test]
    fn setup_script_bootstraps_venv_and_env() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("lead_generation", "Lead Bot");
        let (path, content) = renderer.engine.render_doc(&ctx, DocKind::Setup).unwrap();
        assert_eq!(path.to_str(), Some("setup.sh"));
        assert!(content.starts_with("#!/usr/bin/env bash"));
        assert!(content.contains("python3 -m venv .venv"));
        assert!(content.contains("pip install -r requirements.txt"));
        assert!(content.contains("cp .env.example .env"));
        assert!(content.contains("APIFY_API_TOKEN"));
    }

    #[test]
    fn setup_script_without_env_keys_skips_key_reminder() {
        let renderer = Renderer::new().unwrap();
        let ctx = make_ctx("custom", "Blank");
        let (_, content) = renderer.engine.render_doc(&ctx, DocKind::Setup).unwrap();
        assert!(!content.contains("Required keys in .env"));
    }

    #[test]
    fn output_names_are_stable() {
        let names: Vec<&str> = DocKind::all().iter().map(|d| d.output_name()).collect();
        assert_eq!(
            names,
            vec![
                "AGENTS.md",
                "README.md",
                ".env.example",
                "requirements.txt",
                ".gitignore",
                "setup.sh",
            ]
        );
    }
}
