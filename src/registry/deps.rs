use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SuicError;

pub type DepMap = BTreeMap<String, String>;

/// The three dependency kinds a component can declare, as a unit. Used both
/// per component and as a batch aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependencySet {
    pub dependencies: DepMap,
    pub dev_dependencies: DepMap,
    pub peer_dependencies: DepMap,
}

/// Two components asked for the same package with different version ranges.
/// Reported as a warning; the merge itself is last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    pub package: String,
    pub kept: String,
    pub dropped: String,
}

impl DependencySet {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
            && self.dev_dependencies.is_empty()
            && self.peer_dependencies.is_empty()
    }

    /// Fold `other` into `self`, last write winning per package name within
    /// each kind. Returns the collisions where the two ranges differed.
    pub fn extend_from(&mut self, other: &DependencySet) -> Vec<VersionConflict> {
        let mut conflicts = Vec::new();
        let pairs = [
            (&mut self.dependencies, &other.dependencies),
            (&mut self.dev_dependencies, &other.dev_dependencies),
            (&mut self.peer_dependencies, &other.peer_dependencies),
        ];
        for (dst, src) in pairs {
            for (package, range) in src {
                if let Some(previous) = dst.insert(package.clone(), range.clone()) {
                    if previous != *range {
                        conflicts.push(VersionConflict {
                            package: package.clone(),
                            kept: range.clone(),
                            dropped: previous,
                        });
                    }
                }
            }
        }
        conflicts
    }
}

/// Union a batch of dependency sets. No semver resolution is attempted;
/// conflicting ranges are collected for the caller to warn about.
pub fn merge<'a, I>(sets: I) -> (DependencySet, Vec<VersionConflict>)
where
    I: IntoIterator<Item = &'a DependencySet>,
{
    let mut merged = DependencySet::default();
    let mut conflicts = Vec::new();
    for set in sets {
        conflicts.extend(merged.extend_from(set));
    }
    (merged, conflicts)
}

/// Packages required by removed components that no remaining component still
/// requires, per dependency kind. A package required by any surviving
/// component never appears in the result.
pub fn diff_unused(removed: &[&DependencySet], remaining: &[&DependencySet]) -> DependencySet {
    let (mut unused, _) = merge(removed.iter().copied());
    let (kept, _) = merge(remaining.iter().copied());
    unused
        .dependencies
        .retain(|package, _| !kept.dependencies.contains_key(package));
    unused
        .dev_dependencies
        .retain(|package, _| !kept.dev_dependencies.contains_key(package));
    unused
        .peer_dependencies
        .retain(|package, _| !kept.peer_dependencies.contains_key(package));
    unused
}

// ── Installed-version lookup (advisory only) ──────────────────────────────────

/// How a required version range relates to what package.json says is
/// installed. Never blocks an operation; only annotates the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstalledStatus {
    NotInstalled,
    Exact,
    SameMajor,
    MajorMismatch,
}

/// Classify a required range against the locally installed version.
pub fn classify(required_range: &str, installed: Option<&str>) -> InstalledStatus {
    let Some(installed) = installed else {
        return InstalledStatus::NotInstalled;
    };
    let want = strip_range_prefix(required_range);
    let have = strip_range_prefix(installed);
    if want == have {
        InstalledStatus::Exact
    } else if major(want).is_some() && major(want) == major(have) {
        InstalledStatus::SameMajor
    } else {
        InstalledStatus::MajorMismatch
    }
}

fn strip_range_prefix(version: &str) -> &str {
    version.trim_start_matches(['^', '~', '>', '<', '=', 'v', ' '])
}

fn major(version: &str) -> Option<&str> {
    version
        .split('.')
        .next()
        .filter(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Union of dependencies and devDependencies from a package.json. `None`
/// when the manifest is missing or unparseable; the report then simply
/// omits the installed-version annotations.
pub fn installed_versions(manifest_path: &Path) -> Result<Option<DepMap>, SuicError> {
    if !manifest_path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(manifest_path)?;
    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };

    let mut versions = DepMap::new();
    for kind in ["dependencies", "devDependencies"] {
        if let Some(deps) = value.get(kind).and_then(|v| v.as_object()) {
            for (package, version) in deps {
                if let Some(version) = version.as_str() {
                    versions.insert(package.clone(), version.to_string());
                }
            }
        }
    }
    Ok(Some(versions))
}
