use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::error::SuicError;
use crate::fetcher::FileSource;

/// Fetch each file from the source and write it under `target_dir`,
/// creating intermediate directories. Existing files are overwritten
/// unconditionally; the caller decides when overwriting is allowed.
pub async fn install_files<S: FileSource>(
    source: &S,
    files: &[String],
    target_dir: &Path,
) -> Result<(), SuicError> {
    for rel in files {
        let target = resolve(target_dir, rel)?;
        let content = source.fetch_text(rel).await?;
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, content)?;
    }
    Ok(())
}

/// Delete each file if present. Already-removed files are skipped.
pub fn remove_files(files: &[String], target_dir: &Path) -> Result<(), SuicError> {
    for rel in files {
        let target = resolve(target_dir, rel)?;
        if target.exists() {
            std::fs::remove_file(&target)?;
        }
    }
    Ok(())
}

/// Walk upward from each affected file's parent, deleting directories that a
/// live listing shows empty. Stops at the first non-empty directory, the
/// target root, or any directory in `protected`.
pub fn prune_empty_dirs(
    target_dir: &Path,
    affected: &[String],
    protected: &[PathBuf],
) -> Result<(), SuicError> {
    let protected: HashSet<&Path> = protected
        .iter()
        .map(PathBuf::as_path)
        .chain([target_dir])
        .collect();

    for rel in affected {
        let Some(start) = resolve(target_dir, rel)?.parent().map(Path::to_path_buf) else {
            continue;
        };
        let mut dir = start;
        while dir.starts_with(target_dir) && !protected.contains(dir.as_path()) {
            if dir.exists() {
                if std::fs::read_dir(&dir)?.next().is_some() {
                    break;
                }
                std::fs::remove_dir(&dir)?;
            }
            match dir.parent() {
                Some(parent) => dir = parent.to_path_buf(),
                None => break,
            }
        }
    }
    Ok(())
}

/// Resolve a registry-relative path under `target_dir`, rejecting anything
/// that would escape it.
fn resolve(target_dir: &Path, rel: &str) -> Result<PathBuf, SuicError> {
    let rel_path = Path::new(rel);
    let escapes = rel_path
        .components()
        .any(|c| matches!(c, Component::ParentDir));
    if rel_path.is_absolute() || escapes {
        return Err(SuicError::InvalidFilePath(rel.to_string()));
    }
    Ok(target_dir.join(rel_path))
}
