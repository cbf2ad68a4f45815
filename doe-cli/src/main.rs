//! doe — directive/orchestration/execution workspace scaffolding CLI.
//!
//! # Usage
//!
//! ```text
//! doe --list-types [--json]
//! doe --name <NAME> --type <TYPE>
//!     [--additional-scripts a.py,b.py]
//!     [--additional-directives x.md]
//!     [--additional-packages pkg1,pkg2]
//!     [--source-root PATH] [--output-root PATH] [--template-dir PATH] [--json]
//! doe --check-webhook-map <PATH> [--json]
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};

use commands::generate::GenerateArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "doe",
    version,
    about = "Scaffold self-contained AI agent workspaces from an agent-type catalog",
    long_about = None,
)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["list_types", "name", "check_webhook_map"]),
))]
struct Cli {
    /// List every agent type in the catalog.
    #[arg(long)]
    list_types: bool,

    /// Human-readable name for the new workspace.
    #[arg(long, requires = "agent_type")]
    name: Option<String>,

    /// Agent type key (see --list-types).
    #[arg(long = "type", value_name = "TYPE")]
    agent_type: Option<String>,

    /// Extra execution scripts to include, comma-separated.
    #[arg(long, value_name = "FILE,...", value_delimiter = ',')]
    additional_scripts: Vec<String>,

    /// Extra directive documents to include, comma-separated.
    #[arg(long, value_name = "FILE,...", value_delimiter = ',')]
    additional_directives: Vec<String>,

    /// Extra Python packages for requirements.txt, comma-separated.
    #[arg(long, value_name = "PKG,...", value_delimiter = ',')]
    additional_packages: Vec<String>,

    /// Root directory holding the `directives/` and `execution/` corpus.
    #[arg(long, value_name = "PATH", default_value = ".")]
    source_root: PathBuf,

    /// Directory new workspaces are created under.
    #[arg(long, value_name = "PATH", default_value = "./outputs")]
    output_root: PathBuf,

    /// Directory of `.tera` files overriding the built-in document templates.
    #[arg(long, value_name = "PATH")]
    template_dir: Option<PathBuf>,

    /// Validate a webhook map file against the catalog.
    #[arg(long, value_name = "PATH")]
    check_webhook_map: Option<PathBuf>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    json: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.list_types {
        return commands::list_types::run(cli.json);
    }
    if let Some(path) = cli.check_webhook_map {
        return commands::check_webhook::run(&path, cli.json);
    }

    // The arg group guarantees --name is set here; --name requires --type.
    let args = GenerateArgs {
        name: cli.name.unwrap_or_default(),
        agent_type: cli.agent_type.unwrap_or_default(),
        additional_scripts: cli.additional_scripts,
        additional_directives: cli.additional_directives,
        additional_packages: cli.additional_packages,
        source_root: cli.source_root,
        output_root: cli.output_root,
        template_dir: cli.template_dir,
        json: cli.json,
    };
    args.run()
}
