//! The fixed agent-type catalog (Template Store).
//!
//! # Contract
//!
//! - `Catalog::new()` builds the full enumerated set once; the catalog is
//!   never mutated afterwards.
//! - `resolve` is an exact, case-sensitive lookup. Unknown names fail with
//!   [`CatalogError::UnknownAgentType`] naming the valid set.
//! - `full_stack` is **computed** as the union of every other type's
//!   directives/scripts/packages/env keys, first-declared-wins order.
//!   Adding a type to `declared_types()` grows `full_stack` automatically.

use crate::error::CatalogError;
use crate::types::{AgentTypeName, AgentTypeTemplate};

/// Catalog key reserved for the computed union type.
pub const FULL_STACK: &str = "full_stack";

// ---------------------------------------------------------------------------
// Declared types
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The hand-declared agent types, in catalog order. `full_stack` is not
/// listed here — it is derived from these in [`Catalog::new`].
fn declared_types() -> Vec<AgentTypeTemplate> {
    vec![
        AgentTypeTemplate {
            name: AgentTypeName::from("lead_generation"),
            display_name: "Lead Generation Agent".to_string(),
            description: "Scrapes prospect lists, enriches contacts, and writes them to Google Sheets.".to_string(),
            purpose: "You specialize in building qualified lead lists. Scrape sources via Apify, \
                      enrich contact data, and deliver results as Google Sheet rows."
                .to_string(),
            directives: strings(&["lead_generation.md", "apollo_scraping.md"]),
            scripts: strings(&[
                "apify_scraper.py",
                "serp_search.py",
                "enrich_emails.py",
                "google_sheets.py",
            ]),
            env_keys: strings(&[
                "APIFY_API_TOKEN",
                "GOOGLE_SHEETS_CREDENTIALS_FILE",
                "OPENAI_API_KEY",
            ]),
            packages: strings(&[
                "requests",
                "apify-client",
                "google-api-python-client",
                "google-auth-oauthlib",
                "python-dotenv",
            ]),
        },
        AgentTypeTemplate {
            name: AgentTypeName::from("email_automation"),
            display_name: "Email Automation Agent".to_string(),
            description: "Runs Instantly campaigns and drafts replies with an LLM.".to_string(),
            purpose: "You manage cold-email campaigns end to end: launch Instantly sequences, \
                      monitor replies, and draft responses for human approval."
                .to_string(),
            directives: strings(&["email_campaign.md", "autoreply.md"]),
            scripts: strings(&[
                "instantly_campaign.py",
                "instantly_autoreply.py",
                "llm_email_writer.py",
            ]),
            env_keys: strings(&["INSTANTLY_API_KEY", "OPENAI_API_KEY"]),
            packages: strings(&["requests", "python-dotenv"]),
        },
        AgentTypeTemplate {
            name: AgentTypeName::from("freelance_proposals"),
            display_name: "Freelance Proposal Agent".to_string(),
            description: "Researches prospects and produces tailored proposals via PandaDoc and Google Docs.".to_string(),
            purpose: "You research a prospect's business, assemble a proposal draft, and \
                      deliver it as a PandaDoc document or Google Doc for review."
                .to_string(),
            directives: strings(&["freelance_proposals.md", "proposal_research.md"]),
            scripts: strings(&[
                "serp_search.py",
                "llm_proposal_writer.py",
                "pandadoc_generator.py",
                "google_docs.py",
            ]),
            env_keys: strings(&[
                "SERP_API_KEY",
                "OPENAI_API_KEY",
                "ANTHROPIC_API_KEY",
                "PANDADOC_API_KEY",
                "GOOGLE_DOCS_CREDENTIALS_FILE",
            ]),
            packages: strings(&[
                "requests",
                "google-api-python-client",
                "google-auth-oauthlib",
                "python-dotenv",
            ]),
        },
        AgentTypeTemplate {
            name: AgentTypeName::from("video_editing"),
            display_name: "Video Editing Agent".to_string(),
            description: "Transcribes footage, cuts silence, and renders edits through FFmpeg and Modal.".to_string(),
            purpose: "You turn raw footage into edited cuts: transcribe, detect silence, \
                      apply the requested filter chain, and render the output."
                .to_string(),
            directives: strings(&["video_editing.md"]),
            scripts: strings(&[
                "video_transcribe.py",
                "silence_cut.py",
                "video_render.py",
            ]),
            env_keys: strings(&["OPENAI_API_KEY", "MODAL_TOKEN_ID", "MODAL_TOKEN_SECRET"]),
            packages: strings(&[
                "faster-whisper",
                "ffmpeg-python",
                "modal",
                "python-dotenv",
            ]),
        },
        AgentTypeTemplate {
            name: AgentTypeName::from("crm_integration"),
            display_name: "CRM Integration Agent".to_string(),
            description: "Syncs contact and deal data between spreadsheets and the CRM.".to_string(),
            purpose: "You keep the CRM and its spreadsheet mirrors consistent: pull changed \
                      rows, push updates through the CRM webhook, and report drift."
                .to_string(),
            directives: strings(&["crm_sync.md"]),
            scripts: strings(&["google_sheets.py", "crm_webhook.py"]),
            env_keys: strings(&["GOOGLE_SHEETS_CREDENTIALS_FILE", "CRM_API_KEY"]),
            packages: strings(&[
                "requests",
                "google-api-python-client",
                "google-auth-oauthlib",
                "python-dotenv",
            ]),
        },
        AgentTypeTemplate {
            name: AgentTypeName::from("custom"),
            display_name: "Custom Agent".to_string(),
            description: "An empty shell: bring your own directives and scripts.".to_string(),
            purpose: "You start with no directives. Work with the operator to write new \
                      directives in directives/ and add scripts under execution/."
                .to_string(),
            directives: vec![],
            scripts: vec![],
            env_keys: vec![],
            packages: strings(&["python-dotenv"]),
        },
    ]
}

// ---------------------------------------------------------------------------
// Ordered union
// ---------------------------------------------------------------------------

/// Append items from `extra` that are not already present, preserving
/// first-seen order. The de-dup rule for every file list in the system.
pub fn ordered_union(base: &mut Vec<String>, extra: &[String]) {
    for item in extra {
        if !base.iter().any(|existing| existing == item) {
            base.push(item.clone());
        }
    }
}

fn build_full_stack(declared: &[AgentTypeTemplate]) -> AgentTypeTemplate {
    let mut directives = Vec::new();
    let mut scripts = Vec::new();
    let mut env_keys = Vec::new();
    let mut packages = Vec::new();
    for tpl in declared {
        ordered_union(&mut directives, &tpl.directives);
        ordered_union(&mut scripts, &tpl.scripts);
        ordered_union(&mut env_keys, &tpl.env_keys);
        ordered_union(&mut packages, &tpl.packages);
    }
    AgentTypeTemplate {
        name: AgentTypeName::from(FULL_STACK),
        display_name: "Full Stack Agent".to_string(),
        description: "Every directive, script, and package from every other agent type.".to_string(),
        purpose: "You have the complete DOE toolkit available. Pick the directive that \
                  matches the task; do not improvise when an SOP exists."
            .to_string(),
        directives,
        scripts,
        env_keys,
        packages,
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed, in-memory template store. Build once with [`Catalog::new`]
/// and share by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<AgentTypeTemplate>,
}

impl Catalog {
    /// Build the catalog: declared types plus the computed `full_stack`,
    /// inserted before `custom` so the empty shell stays last in listings.
    pub fn new() -> Self {
        let declared = declared_types();
        let full_stack = build_full_stack(&declared);
        let mut templates = declared;
        let custom_pos = templates
            .iter()
            .position(|t| t.name.0 == "custom")
            .unwrap_or(templates.len());
        templates.insert(custom_pos, full_stack);
        Catalog { templates }
    }

    /// All templates in catalog order.
    pub fn list(&self) -> &[AgentTypeTemplate] {
        &self.templates
    }

    /// The valid type names, in catalog order.
    pub fn type_names(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.name.0.clone()).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, name: &AgentTypeName) -> Result<&AgentTypeTemplate, CatalogError> {
        self.templates
            .iter()
            .find(|t| &t.name == name)
            .ok_or_else(|| CatalogError::UnknownAgentType {
                requested: name.0.clone(),
                valid: self.type_names().join(", "),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
