//! Union/de-dup planning for the files and packages of a workspace.

use doe_core::catalog::ordered_union;
use doe_core::types::{AgentTypeTemplate, WorkspaceRequest};

/// The resolved file and package lists for one generation, before any
/// filesystem access: template defaults unioned with the request's
/// extras, de-duplicated, first-seen order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePlan {
    pub directives: Vec<String>,
    pub scripts: Vec<String>,
    pub packages: Vec<String>,
}

impl WorkspacePlan {
    pub fn build(template: &AgentTypeTemplate, request: &WorkspaceRequest) -> Self {
        let mut directives = template.directives.clone();
        ordered_union(&mut directives, &request.extra_directives);

        let mut scripts = template.scripts.clone();
        ordered_union(&mut scripts, &request.extra_scripts);

        let mut packages = template.packages.clone();
        ordered_union(&mut packages, &request.extra_packages);

        WorkspacePlan {
            directives,
            scripts,
            packages,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
