//! Filesystem layer: atomic document writes and corpus file copies.
//!
//! ## `atomic_write` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. Ensure the parent directory exists.
//! 3. Write to a `<path>.doe.tmp` sibling (same filesystem — no EXDEV).
//! 4. Rename to the final path (atomic on POSIX); remove the tmp on failure.

use std::path::{Path, PathBuf};

use crate::error::{io_err, GenerateError};

/// Outcome of copying one requested corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// The source file existed and was copied into the workspace.
    Copied { name: String },
    /// The source file was absent (or the name was unsafe). Non-fatal;
    /// recorded in the manifest.
    Missing { name: String },
}

/// Reject names that could escape the corpus directory via path traversal.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
        && !name.contains('\0')
}

/// Atomically write a rendered document.
pub fn atomic_write(path: &Path, content: &str) -> Result<(), GenerateError> {
    let normalized = content.replace("\r\n", "\n");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.doe.tmp", path.display()));
    std::fs::write(&tmp, normalized).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(())
}

/// Mark a rendered script as executable. No-op on platforms without
/// Unix permission bits.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<(), GenerateError> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)
        .map_err(|e| io_err(path, e))?
        .permissions();
    perms.set_mode(perms.mode() | 0o755);
    std::fs::set_permissions(path, perms).map_err(|e| io_err(path, e))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<(), GenerateError> {
    Ok(())
}

/// Copy one named file from `source_dir` into `dest_dir`.
///
/// A missing source is a warning, not an error — the workspace is still
/// produced and the omission surfaces in the manifest.
pub fn copy_corpus_file(
    source_dir: &Path,
    dest_dir: &Path,
    name: &str,
) -> Result<CopyResult, GenerateError> {
    if !is_safe_name(name) {
        tracing::warn!("rejected unsafe file name: {name:?}");
        return Ok(CopyResult::Missing {
            name: name.to_string(),
        });
    }

    let src = source_dir.join(name);
    if !src.is_file() {
        tracing::warn!("source file not found: {}", src.display());
        return Ok(CopyResult::Missing {
            name: name.to_string(),
        });
    }

    std::fs::create_dir_all(dest_dir).map_err(|e| io_err(dest_dir, e))?;
    let dest = dest_dir.join(name);
    std::fs::copy(&src, &dest).map_err(|e| io_err(&dest, e))?;
    tracing::info!("copied: {}", dest.display());
    Ok(CopyResult::Copied {
        name: name.to_string(),
    })
}

/// Copy a list of corpus files, partitioning the names into
/// `(copied, missing)` while preserving request order.
pub fn copy_corpus_files(
    source_dir: &Path,
    dest_dir: &Path,
    names: &[String],
) -> Result<(Vec<String>, Vec<String>), GenerateError> {
    let mut copied = Vec::new();
    let mut missing = Vec::new();
    for name in names {
        match copy_corpus_file(source_dir, dest_dir, name)? {
            CopyResult::Copied { name } => copied.push(name),
            CopyResult::Missing { name } => missing.push(name),
        }
    }
    Ok((copied, missing))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_parents_and_cleans_tmp() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deep").join("AGENTS.md");
        atomic_write(&path, "hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        let tmp_path = PathBuf::from(format!("{}.doe.tmp", path.display()));
        assert!(!tmp_path.exists(), ".doe.tmp must be cleaned up");
    }

    #[test]
    fn atomic_write_normalizes_crlf() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.md");
        atomic_write(&path, "a\r\nb\r\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[cfg(unix)]
    #[test]
    fn make_executable_sets_exec_bits() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("setup.sh");
        atomic_write(&path, "#!/usr/bin/env bash\n").unwrap();
        make_executable(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0, "exec bits must be set, mode {mode:o}");
    }

    #[test]
    fn copy_existing_file_succeeds() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        fs::write(src_dir.path().join("tool.py"), "print('ok')\n").unwrap();

        let result = copy_corpus_file(src_dir.path(), dest_dir.path(), "tool.py").unwrap();
        assert_eq!(result, CopyResult::Copied { name: "tool.py".to_string() });
        assert!(dest_dir.path().join("tool.py").exists());
    }

    #[test]
    fn copy_missing_file_is_non_fatal() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let result = copy_corpus_file(src_dir.path(), dest_dir.path(), "ghost.py").unwrap();
        assert_eq!(result, CopyResult::Missing { name: "ghost.py".to_string() });
        assert!(!dest_dir.path().join("ghost.py").exists());
    }

    #[test]
    fn traversal_names_are_treated_as_missing() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        for bad in ["../escape.py", "sub/dir.py", "", "a\\b.py"] {
            let result = copy_corpus_file(src_dir.path(), dest_dir.path(), bad).unwrap();
            assert!(
                matches!(result, CopyResult::Missing { .. }),
                "{bad:?} must not be copied"
            );
        }
    }

    #[test]
    fn copy_list_partitions_in_order() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        fs::write(src_dir.path().join("a.py"), "a").unwrap();
        fs::write(src_dir.path().join("c.py"), "c").unwrap();

        let names = vec!["a.py".to_string(), "b.py".to_string(), "c.py".to_string()];
        let (copied, missing) = copy_corpus_files(src_dir.path(), dest_dir.path(), &names).unwrap();
        assert_eq!(copied, vec!["a.py", "c.py"]);
        assert_eq!(missing, vec!["b.py"]);
    }
}
