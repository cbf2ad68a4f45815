//! Domain types for the DOE template store.
//!
//! All filename fields are plain `String`s — they name entries inside the
//! framework's `directives/` and `execution/` corpus directories, never
//! arbitrary filesystem paths. All types are serializable via serde.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed key for an agent type in the catalog (e.g. `lead_generation`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentTypeName(pub String);

impl fmt::Display for AgentTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AgentTypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AgentTypeName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed human-readable workspace name (e.g. `"My Lead Bot"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceName(pub String);

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for WorkspaceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkspaceName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One agent type in the catalog.
///
/// Immutable once built — the catalog is constructed in code and never
/// mutated at runtime. File lists are ordered; order is part of the
/// contract (it drives `.env.example` and `requirements.txt` layout and
/// the first-declared-wins `full_stack` union).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTypeTemplate {
    pub name: AgentTypeName,
    /// Display name shown in `--list-types` output and rendered documents.
    pub display_name: String,
    pub description: String,
    /// System-prompt text injected into the rendered `AGENTS.md`.
    pub purpose: String,
    /// Directive filenames under the source corpus `directives/`.
    pub directives: Vec<String>,
    /// Script filenames under the source corpus `execution/`.
    pub scripts: Vec<String>,
    /// Required configuration keys listed in the rendered `.env.example`.
    pub env_keys: Vec<String>,
    /// Default package names for the rendered `requirements.txt`.
    pub packages: Vec<String>,
}

/// A single workspace-generation request. Created per invocation; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceRequest {
    pub name: WorkspaceName,
    pub agent_type: AgentTypeName,
    #[serde(default)]
    pub extra_scripts: Vec<String>,
    #[serde(default)]
    pub extra_directives: Vec<String>,
    #[serde(default)]
    pub extra_packages: Vec<String>,
}

impl WorkspaceRequest {
    /// A request with no extras.
    pub fn new(name: impl Into<WorkspaceName>, agent_type: impl Into<AgentTypeName>) -> Self {
        WorkspaceRequest {
            name: name.into(),
            agent_type: agent_type.into(),
            extra_scripts: Vec::new(),
            extra_directives: Vec::new(),
            extra_packages: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(AgentTypeName::from("lead_generation").to_string(), "lead_generation");
        assert_eq!(WorkspaceName::from("My Lead Bot").to_string(), "My Lead Bot");
    }

    #[test]
    fn newtype_equality() {
        let a = AgentTypeName::from("custom");
        let b = AgentTypeName::from(String::from("custom"));
        assert_eq!(a, b);
    }

    #[test]
    fn request_new_has_no_extras() {
        let req = WorkspaceRequest::new("X", "custom");
        assert!(req.extra_scripts.is_empty());
        assert!(req.extra_directives.is_empty());
        assert!(req.extra_packages.is_empty());
    }

    #[test]
    fn template_serde_roundtrip() {
        let tpl = AgentTypeTemplate {
            name: AgentTypeName::from("custom"),
            display_name: "Custom Agent".to_string(),
            description: "Start from scratch.".to_string(),
            purpose: "You build your own directives.".to_string(),
            directives: vec![],
            scripts: vec![],
            env_keys: vec![],
            packages: vec!["python-dotenv".to_string()],
        };
        let json = serde_json::to_string(&tpl).expect("serialize");
        let back: AgentTypeTemplate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tpl);
    }
}
