use std::path::PathBuf;

// ── Remote registry ───────────────────────────────────────────────────────────

/// Base URL every registry document and component file is fetched from.
pub const BASE_URL: &str = "https://raw.githubusercontent.com/vishnudt2004/test-repo/main/";

/// Bootstrap registry installed by `init`, relative to [`BASE_URL`].
pub const INIT_REGISTRY_FILE: &str = "registries/init.json";

/// Components catalog, relative to [`BASE_URL`].
pub const COMPONENTS_REGISTRY_FILE: &str = "registries/components.json";

pub const COMPONENTS_DOC_URL: &str = "https://github.com/vishnudt2004/test-repo#readme";

// ── Project-local files ───────────────────────────────────────────────────────

pub const DEFAULT_INSTALL_PATH: &str = "src/suic";

/// Path to suic.config.json in the current directory
pub fn config_path() -> PathBuf {
    PathBuf::from("suic.config.json")
}

/// Path to the installed-component registry in the current directory
pub fn installed_registry_path() -> PathBuf {
    PathBuf::from("suic.installed.json")
}

/// Path to package.json in the current directory
pub fn package_manifest_path() -> PathBuf {
    PathBuf::from("package.json")
}

/// Path to tsconfig.json in the current directory
pub fn tsconfig_path() -> PathBuf {
    PathBuf::from("tsconfig.json")
}

// ── tsconfig path alias ───────────────────────────────────────────────────────

pub const TS_PATH_ALIAS: &str = "suic/*";

/// Alias target for a given install path: "src/suic" → "src/suic/*"
pub fn ts_alias_value(install_path: &str) -> String {
    format!("{install_path}/*")
}
