//! Workspace naming: filesystem-safe slugs and collision-free target paths.

use std::path::{Path, PathBuf};

use chrono::Utc;

/// Convert a human-readable workspace name to a filesystem-safe slug:
/// lowercase, spaces/underscores become hyphens, anything outside
/// `[a-z0-9-]` is dropped, runs of hyphens collapse.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_hyphen = true; // suppress leading hyphens
    for ch in name.chars() {
        let mapped = match ch {
            ' ' | '_' | '-' => Some('-'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        };
        if let Some(c) = mapped {
            if c == '-' {
                if !last_hyphen {
                    slug.push('-');
                    last_hyphen = true;
                }
            } else {
                slug.push(c);
                last_hyphen = false;
            }
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("workspace");
    }
    slug
}

/// Pick a target directory for `slug` under `output_root` that does not
/// exist yet.
///
/// First choice is `output_root/<slug>`. On collision a UTC timestamp
/// suffix is appended; if even that exists (two generations within the
/// same second), a numeric counter disambiguates. Never overwrites,
/// never merges into an existing workspace.
pub fn unique_workspace_dir(output_root: &Path, slug: &str) -> PathBuf {
    let plain = output_root.join(slug);
    if !plain.exists() {
        return plain;
    }
    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    let stamped = output_root.join(format!("{slug}-{stamp}"));
    if !stamped.exists() {
        return stamped;
    }
    let mut counter = 2u32;
    loop {
        let candidate = output_root.join(format!("{slug}-{stamp}-{counter}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
