//! Webhook mapping document.
//!
//! A JSON file mapping a webhook slug to a directive name and an allow-list
//! of callable script names. The map itself is consumed by the external
//! cloud-deployment collaborator; this module only loads and sanity-checks
//! it against the catalog.
//!
//! ```json
//! {
//!   "routes": {
//!     "new-lead": { "directive": "lead_generation.md",
//!                   "scripts": ["apify_scraper.py", "google_sheets.py"] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::WebhookError;

/// One webhook route: the directive the orchestrator should follow and the
/// scripts it is allowed to invoke for that route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRoute {
    pub directive: String,
    #[serde(default)]
    pub scripts: Vec<String>,
}

/// The full mapping, keyed by webhook slug. `BTreeMap` keeps validation
/// output and serialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WebhookMap {
    #[serde(default)]
    pub routes: BTreeMap<String, WebhookRoute>,
}

impl WebhookMap {
    /// Load a webhook map from a JSON file.
    pub fn load(path: &Path) -> Result<WebhookMap, WebhookError> {
        let contents = std::fs::read_to_string(path).map_err(|e| WebhookError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| WebhookError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check every route against the catalog: each directive and each
    /// allow-listed script must be declared by at least one agent type.
    ///
    /// Findings are advisory, not errors — a stale map entry must not block
    /// anything. Returns an empty vec when the map is consistent.
    pub fn validate(&self, catalog: &Catalog) -> Vec<String> {
        let mut findings = Vec::new();
        for (slug, route) in &self.routes {
            if !catalog
                .list()
                .iter()
                .any(|t| t.directives.contains(&route.directive))
            {
                findings.push(format!(
                    "route '{slug}': directive '{}' is not declared by any agent type",
                    route.directive
                ));
            }
            for script in &route.scripts {
                if !catalog.list().iter().any(|t| t.scripts.contains(script)) {
                    findings.push(format!(
                        "route '{slug}': script '{script}' is not declared by any agent type"
                    ));
                }
            }
        }
        findings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_map(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("webhooks.json");
        std::fs::write(&path, contents).expect("write map");
        path
    }

    #[test]
    fn load_and_validate_clean_map() {
        let dir = TempDir::new().unwrap();
        let path = write_map(
            &dir,
            r#"{"routes": {"new-lead": {"directive": "lead_generation.md",
                "scripts": ["apify_scraper.py", "google_sheets.py"]}}}"#,
        );
        let map = WebhookMap::load(&path).expect("load");
        assert_eq!(map.routes.len(), 1);
        let findings = map.validate(&Catalog::new());
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn validate_flags_unknown_directive_and_script() {
        let map: WebhookMap = serde_json::from_str(
            r#"{"routes": {"bad": {"directive": "nope.md", "scripts": ["ghost.py"]}}}"#,
        )
        .unwrap();
        let findings = map.validate(&Catalog::new());
        assert_eq!(findings.len(), 2);
        assert!(findings[0].contains("nope.md"));
        assert!(findings[1].contains("ghost.py"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = WebhookMap::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, WebhookError::Io { .. }));
    }

    #[test]
    fn load_malformed_json_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write_map(&dir, "{not json");
        let err = WebhookMap::load(&path).unwrap_err();
        assert!(matches!(err, WebhookError::Parse { .. }));
        assert!(err.to_string().contains("webhooks.json"));
    }

    #[test]
    fn empty_scripts_allowlist_is_valid() {
        let map: WebhookMap = serde_json::from_str(
            r#"{"routes": {"r": {"directive": "crm_sync.md"}}}"#,
        )
        .unwrap();
        assert!(map.routes["r"].scripts.is_empty());
        assert!(map.validate(&Catalog::new()).is_empty());
    }
}
