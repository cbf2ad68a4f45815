//! `doe --check-webhook-map` — sanity-check a webhook map against the catalog.

use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;

use doe_core::{Catalog, WebhookMap};

#[derive(Serialize)]
struct CheckJson {
    path: String,
    routes: usize,
    findings: Vec<String>,
}

pub fn run(path: &Path, json: bool) -> Result<()> {
    let map = WebhookMap::load(path)
        .with_context(|| format!("failed to load webhook map {}", path.display()))?;
    let findings = map.validate(&Catalog::new());

    if json {
        let payload = CheckJson {
            path: path.display().to_string(),
            routes: map.routes.len(),
            findings: findings.clone(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("failed to serialize check result")?
        );
    } else if findings.is_empty() {
        println!(
            "{} {} routes consistent with the catalog",
            "✓".green().bold(),
            map.routes.len()
        );
    } else {
        for finding in &findings {
            println!("  {}  {finding}", "!".yellow().bold());
        }
    }

    if !findings.is_empty() {
        bail!("webhook map has {} finding(s)", findings.len());
    }
    Ok(())
}
