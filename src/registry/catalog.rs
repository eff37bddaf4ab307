use serde::Deserialize;

use crate::registry::deps::DependencySet;
use crate::registry::names;

/// One entry of the remote components catalog. Read-only; removal decisions
/// never consult this, only the installed registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub doc_url: Option<String>,
    pub files: Vec<String>,
    #[serde(flatten)]
    pub deps: DependencySet,
}

/// Bootstrap registry consumed by `init`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRegistry {
    pub files: Vec<String>,
    #[serde(default)]
    pub additional_instructions: Vec<Instruction>,
    #[serde(flatten)]
    pub deps: DependencySet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Instruction {
    pub title: String,
    pub description: String,
}

/// Case-insensitive catalog lookup by component name.
pub fn find_entry<'a>(catalog: &'a [CatalogEntry], name: &str) -> Option<&'a CatalogEntry> {
    let key = names::normalize(name);
    catalog.iter().find(|entry| names::normalize(&entry.name) == key)
}
