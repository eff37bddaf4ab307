use std::path::Path;

use serde_json::json;

use crate::config::installed::InstalledStore;
use crate::config::project::{self, Config};
use crate::error::SuicError;
use crate::fetcher::http::HttpSource;
use crate::installer;
use crate::paths;
use crate::registry::deps;
use crate::ui::{self, Prompter, StdinPrompter};

pub async fn run(install_path: &str) -> Result<(), SuicError> {
    let prompter = StdinPrompter;
    if !prompter.confirm("Confirm you're in the project root (with package.json).")? {
        ui::info("Initialization cancelled.");
        return Ok(());
    }

    let install_path = project::sanitize_install_path(install_path);
    let cwd = std::env::current_dir()?;
    let config = Config {
        cwd: cwd.to_string_lossy().replace('\\', "/"),
        install_path: install_path.clone(),
    };
    config.save(&paths::config_path())?;

    let source = HttpSource::new(paths::BASE_URL)?;
    let registry = source.fetch_init_registry().await?;

    let target_dir = Path::new(&install_path);
    installer::install_files(&source, &registry.files, target_dir).await?;

    add_path_alias(&paths::tsconfig_path(), &install_path)?;

    // An existing registry survives re-initialization; only a corrupt one
    // is recreated empty.
    match InstalledStore::load(paths::installed_registry_path()) {
        Ok(store) => store.ensure_file()?,
        Err(SuicError::CorruptState(..)) => {
            ui::warn("Existing installed registry is corrupt; recreating it empty.");
            InstalledStore::empty(paths::installed_registry_path()).save()?;
        }
        Err(err) => return Err(err),
    }

    let installed = deps::installed_versions(&paths::package_manifest_path())?;
    ui::print_dependencies(
        "Required dependencies (install if missing, skip if already installed and compatible):",
        &registry.deps,
        installed.as_ref(),
    );

    if !registry.additional_instructions.is_empty() {
        ui::info("Additional setup instructions:");
        for instruction in &registry.additional_instructions {
            println!("  ▪ {}:", instruction.title);
            println!("      {}", instruction.description);
        }
        ui::blank();
    }

    ui::success(&format!(
        "Simple UI Components ready at '{install_path}'. Run 'suic-cli add [components...]' to use."
    ));
    Ok(())
}

/// Add the `suic/*` alias to tsconfig.json when the file exists and the
/// alias is not already present. A project without a tsconfig is left alone.
fn add_path_alias(tsconfig: &Path, install_path: &str) -> Result<(), SuicError> {
    if !tsconfig.exists() {
        return Ok(());
    }
    let raw = std::fs::read_to_string(tsconfig)?;
    let mut value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => {
            ui::warn("tsconfig.json could not be parsed; skipping path alias.");
            return Ok(());
        }
    };

    let Some(root) = value.as_object_mut() else {
        ui::warn("tsconfig.json is not a JSON object; skipping path alias.");
        return Ok(());
    };
    let compiler = root
        .entry("compilerOptions")
        .or_insert_with(|| json!({}));
    let Some(compiler) = compiler.as_object_mut() else {
        ui::warn("tsconfig.json compilerOptions is not a JSON object; skipping path alias.");
        return Ok(());
    };
    let alias_paths = compiler.entry("paths").or_insert_with(|| json!({}));
    let Some(alias_paths) = alias_paths.as_object_mut() else {
        ui::warn("tsconfig.json paths is not a JSON object; skipping path alias.");
        return Ok(());
    };

    if !alias_paths.contains_key(paths::TS_PATH_ALIAS) {
        alias_paths.insert(
            paths::TS_PATH_ALIAS.to_string(),
            json!([paths::ts_alias_value(install_path)]),
        );
        std::fs::write(tsconfig, serde_json::to_string_pretty(&value)? + "\n")?;
    }
    Ok(())
}
