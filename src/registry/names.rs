use std::collections::HashSet;

/// Lowercased, whitespace-trimmed identity key for a component name.
/// This is the only equality function used for component identity.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Drop later duplicates under normalized equality, keeping first-seen order
/// and original casing. Used to collapse repeated CLI arguments.
pub fn dedupe(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(normalize(name)))
        .cloned()
        .collect()
}
