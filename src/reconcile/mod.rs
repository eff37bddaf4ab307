//! Add/remove reconciliation against the installed registry.
//!
//! Add resolves requests against the remote catalog; remove resolves them
//! against the installed registry only, so it keeps working when the catalog
//! is unreachable or has changed since install.

use std::collections::HashSet;
use std::path::Path;

use crate::config::installed::{InstalledRecord, InstalledStore};
use crate::error::SuicError;
use crate::fetcher::FileSource;
use crate::installer;
use crate::registry::catalog::{self, CatalogEntry};
use crate::registry::deps::{self, DependencySet, VersionConflict};
use crate::registry::names;
use crate::ui::Prompter;

/// Batch-end report for the add flow.
#[derive(Debug, Default)]
pub struct AddReport {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
    pub invalid: Vec<String>,
    pub failed: Vec<(String, SuicError)>,
    /// Merged required dependencies of everything added in this batch.
    pub required: DependencySet,
    pub conflicts: Vec<VersionConflict>,
}

/// Batch-end report for the remove flow.
#[derive(Debug, Default)]
pub struct RemoveReport {
    pub removed: Vec<String>,
    pub invalid: Vec<String>,
    /// Files referenced by removed components and by no remaining one.
    pub unused_files: Vec<String>,
    /// Dependencies no surviving component still requires. Advisory; the
    /// user uninstalls packages manually.
    pub unused_deps: DependencySet,
}

/// Install requested components. Unknown names and declined reinstalls are
/// collected, per-component fetch/write failures are isolated, and the store
/// is persisted after every successful install, so an interrupted batch
/// reflects exactly the components processed so far.
pub async fn add<S, P>(
    catalog: &[CatalogEntry],
    store: &mut InstalledStore,
    target_dir: &Path,
    source: &S,
    prompter: &P,
    requested: &[String],
) -> Result<AddReport, SuicError>
where
    S: FileSource,
    P: Prompter,
{
    let mut report = AddReport::default();

    for raw in names::dedupe(requested) {
        let Some(entry) = catalog::find_entry(catalog, &raw) else {
            report.invalid.push(raw);
            continue;
        };

        if store.get(&entry.name).is_some() {
            let message = format!(
                "Component '{}' already installed. Reinstall? \
                 (Warning: modified files will be lost, including files shared with other components)",
                entry.name
            );
            if !prompter.confirm(&message)? {
                report.skipped.push(entry.name.clone());
                continue;
            }
        }

        match installer::install_files(source, &entry.files, target_dir).await {
            Ok(()) => {
                store.record_add(&entry.name, InstalledRecord::from_catalog(entry))?;
                let conflicts = report.required.extend_from(&entry.deps);
                report.conflicts.extend(conflicts);
                report.added.push(entry.name.clone());
            }
            // Files already written for this component stay on disk; nothing
            // is recorded for it and the batch moves on.
            Err(err) => report.failed.push((entry.name.clone(), err)),
        }
    }

    Ok(report)
}

/// Remove requested components using the recorded install state, then delete
/// the files and report the dependencies no surviving component references.
pub fn remove(
    store: &mut InstalledStore,
    target_dir: &Path,
    requested: &[String],
) -> Result<RemoveReport, SuicError> {
    let mut report = RemoveReport::default();
    let mut removed_records: Vec<InstalledRecord> = Vec::new();

    // The store's in-memory map shrinks as the batch progresses, so the
    // shared-file and shared-dependency checks below only count components
    // that survive this batch. Each removal is persisted immediately.
    for raw in names::dedupe(requested) {
        match store.record_remove(&raw)? {
            Some((name, record)) => {
                removed_records.push(record);
                report.removed.push(name);
            }
            None => report.invalid.push(raw),
        }
    }

    let kept_files: HashSet<&str> = store
        .records()
        .flat_map(|record| record.files.iter())
        .map(String::as_str)
        .collect();

    let mut seen = HashSet::new();
    for record in &removed_records {
        for file in &record.files {
            if !kept_files.contains(file.as_str()) && seen.insert(file.clone()) {
                report.unused_files.push(file.clone());
            }
        }
    }

    let removed_sets: Vec<&DependencySet> = removed_records.iter().map(|r| &r.deps).collect();
    let remaining_sets: Vec<&DependencySet> = store.records().map(|r| &r.deps).collect();
    report.unused_deps = deps::diff_unused(&removed_sets, &remaining_sets);

    if !report.unused_files.is_empty() {
        installer::remove_files(&report.unused_files, target_dir)?;
        installer::prune_empty_dirs(target_dir, &report.unused_files, &[])?;
    }

    Ok(report)
}
