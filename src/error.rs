use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SuicError {
    #[error("Config file not found at {0}. Run 'suic-cli init' first.")]
    ConfigNotFound(PathBuf),

    #[error("Invalid config at {0}. Run 'suic-cli init' to reinitialize (may overwrite changes) or fix it manually.")]
    ConfigInvalid(PathBuf, #[source] serde_json::Error),

    #[error("Installed registry at {0} is corrupt. Run 'suic-cli init' to reinitialize.")]
    CorruptState(PathBuf, #[source] serde_json::Error),

    #[error("No components available.")]
    EmptyCatalog,

    #[error("No components were installed or the installed registry file is missing.")]
    NothingInstalled,

    #[error("Invalid file path in registry entry: {0}")]
    InvalidFilePath(String),

    #[error("Request to {0} timed out")]
    NetworkTimeout(String),

    #[error("Failed to fetch {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("No selection made.")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
