//! `doe --list-types` — show the agent-type catalog.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use doe_core::Catalog;

#[derive(Serialize)]
struct TypeJson {
    name: String,
    display_name: String,
    description: String,
    directives: Vec<String>,
    scripts: Vec<String>,
    env_keys: Vec<String>,
    packages: Vec<String>,
}

#[derive(Tabled)]
struct TypeTableRow {
    #[tabled(rename = "type")]
    name: String,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "scripts")]
    scripts: usize,
    #[tabled(rename = "env keys")]
    env_keys: usize,
}

pub fn run(json: bool) -> Result<()> {
    let catalog = Catalog::new();

    if json {
        let payload: Vec<TypeJson> = catalog
            .list()
            .iter()
            .map(|t| TypeJson {
                name: t.name.0.clone(),
                display_name: t.display_name.clone(),
                description: t.description.clone(),
                directives: t.directives.clone(),
                scripts: t.scripts.clone(),
                env_keys: t.env_keys.clone(),
                packages: t.packages.clone(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("failed to serialize type list")?
        );
        return Ok(());
    }

    println!(
        "doe v{} | {} agent types",
        env!("CARGO_PKG_VERSION"),
        catalog.list().len()
    );

    let rows: Vec<TypeTableRow> = catalog
        .list()
        .iter()
        .map(|t| TypeTableRow {
            name: t.name.0.clone(),
            description: t.description.clone(),
            scripts: t.scripts.len(),
            env_keys: t.env_keys.len(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!(
        "{}",
        "Run 'doe --name <NAME> --type <TYPE>' to generate a workspace.".bright_black()
    );
    Ok(())
}
