use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SuicError;
use crate::registry::catalog::CatalogEntry;
use crate::registry::deps::DependencySet;
use crate::registry::names;

/// Snapshot of one component at install time. Removal always works from
/// this record, never from the current catalog, so a later catalog change
/// cannot alter what "installed" means for cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledRecord {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(flatten)]
    pub deps: DependencySet,
}

impl InstalledRecord {
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        Self {
            files: entry.files.clone(),
            deps: entry.deps.clone(),
        }
    }
}

/// The installed-component registry: original-cased component name →
/// [`InstalledRecord`], persisted as a JSON object. The single source of
/// truth for what is on disk; this type is its only writer.
#[derive(Debug)]
pub struct InstalledStore {
    path: PathBuf,
    entries: BTreeMap<String, InstalledRecord>,
}

impl InstalledStore {
    /// A missing file is first-time use, not an error. Malformed JSON is
    /// surfaced as `CorruptState` and must not be swallowed.
    pub fn load(path: PathBuf) -> Result<Self, SuicError> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| SuicError::CorruptState(path.clone(), e))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Stored names, in their original casing.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &InstalledRecord> {
        self.entries.values()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&InstalledRecord> {
        self.find_key(name).and_then(|key| self.entries.get(&key))
    }

    /// Upsert and persist immediately. A reinstall keeps the key casing
    /// chosen at first install, whatever casing the request used.
    pub fn record_add(&mut self, name: &str, record: InstalledRecord) -> Result<(), SuicError> {
        let key = self.find_key(name).unwrap_or_else(|| name.to_string());
        self.entries.insert(key, record);
        self.save()
    }

    /// Remove by normalized name and persist. Unknown names are a no-op
    /// (the caller reports them); the file is not rewritten for them.
    pub fn record_remove(
        &mut self,
        name: &str,
    ) -> Result<Option<(String, InstalledRecord)>, SuicError> {
        let Some(key) = self.find_key(name) else {
            return Ok(None);
        };
        match self.entries.remove(&key) {
            Some(record) => {
                self.save()?;
                Ok(Some((key, record)))
            }
            None => Ok(None),
        }
    }

    /// Create an empty registry file if none exists yet.
    pub fn ensure_file(&self) -> Result<(), SuicError> {
        if self.path.exists() {
            Ok(())
        } else {
            self.save()
        }
    }

    /// Full rewrite through a sibling temp file and rename, so a failed
    /// write cannot truncate the registry.
    pub fn save(&self) -> Result<(), SuicError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content + "\n")?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn find_key(&self, name: &str) -> Option<String> {
        let key = names::normalize(name);
        self.entries
            .keys()
            .find(|stored| names::normalize(stored) == key)
            .cloned()
    }
}
