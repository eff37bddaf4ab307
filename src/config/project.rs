use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SuicError;

/// suic.config.json: written once by `init`, read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub cwd: String,
    /// Directory component files land in, relative to the project root.
    pub install_path: String,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, SuicError> {
        if !path.exists() {
            return Err(SuicError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SuicError::ConfigInvalid(path.to_path_buf(), e))
    }

    pub fn save(&self, path: &Path) -> Result<(), SuicError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content + "\n")?;
        Ok(())
    }
}

/// Normalize separators and strip leading slashes so the install path stays
/// relative to the project root: "/src\\suic/" → "src/suic"
pub fn sanitize_install_path(raw: &str) -> String {
    raw.replace('\\', "/")
        .trim_start_matches('/')
        .trim_end_matches('/')
        .to_string()
}
