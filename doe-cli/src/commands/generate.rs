//! `doe --name <NAME> --type <TYPE>` — generate a workspace.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use doe_core::{Catalog, WorkspaceRequest};
use doe_generator::{generate_with_templates, GeneratedWorkspace};

/// Arguments for a single workspace generation.
#[derive(Debug)]
pub struct GenerateArgs {
    pub name: String,
    pub agent_type: String,
    pub additional_scripts: Vec<String>,
    pub additional_directives: Vec<String>,
    pub additional_packages: Vec<String>,
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub template_dir: Option<PathBuf>,
    pub json: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let catalog = Catalog::new();

        let mut request = WorkspaceRequest::new(self.name.as_str(), self.agent_type.as_str());
        request.extra_scripts = self.additional_scripts;
        request.extra_directives = self.additional_directives;
        request.extra_packages = self.additional_packages;

        let manifest = generate_with_templates(
            &catalog,
            &request,
            &self.source_root,
            &self.output_root,
            self.template_dir.as_deref(),
        )
        .with_context(|| format!("failed to generate workspace '{}'", self.name))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&manifest)
                    .context("failed to serialize workspace manifest")?
            );
            return Ok(());
        }

        print_summary(&manifest);
        Ok(())
    }
}

fn print_summary(manifest: &GeneratedWorkspace) {
    println!(
        "{} workspace '{}' ({}) at {}",
        "✓".green().bold(),
        manifest.slug,
        manifest.agent_type,
        manifest.path.display()
    );
    println!(
        "  {} directives, {} scripts, {} rendered documents",
        manifest.directives.len(),
        manifest.scripts.len(),
        manifest.rendered.len()
    );
    for doc in &manifest.rendered {
        println!("  ✎  {doc}");
    }

    for name in &manifest.missing_directives {
        println!("  {}  directive not in corpus: {name}", "!".yellow().bold());
    }
    for name in &manifest.missing_scripts {
        println!("  {}  script not in corpus: {name}", "!".yellow().bold());
    }

    if !manifest.env_keys.is_empty() {
        println!(
            "Fill in {} before running the agent: {}",
            ".env".bold(),
            manifest.env_keys.join(", ")
        );
    }
}
