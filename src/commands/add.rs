use std::path::Path;

use crate::config::installed::InstalledStore;
use crate::config::project::Config;
use crate::error::SuicError;
use crate::fetcher::http::HttpSource;
use crate::paths;
use crate::reconcile;
use crate::registry::deps;
use crate::ui::{self, Prompter, StdinPrompter};

pub async fn run(components: Vec<String>) -> Result<(), SuicError> {
    let config = Config::load(&paths::config_path())?;

    let source = HttpSource::new(paths::BASE_URL)?;
    let catalog = source.fetch_catalog().await?;
    if catalog.is_empty() {
        return Err(SuicError::EmptyCatalog);
    }

    let mut store = InstalledStore::load(paths::installed_registry_path())?;

    let prompter = StdinPrompter;
    let requested = if components.is_empty() {
        let choices: Vec<String> = catalog.iter().map(|c| c.name.clone()).collect();
        prompter.multi_select("Select components to add:", &choices)?
    } else {
        components
    };

    let target_dir = Path::new(&config.install_path);
    let report =
        reconcile::add(&catalog, &mut store, target_dir, &source, &prompter, &requested).await?;

    ui::blank();
    ui::print_conflicts(&report.conflicts);

    if !report.added.is_empty() {
        let installed = deps::installed_versions(&paths::package_manifest_path())?;
        ui::print_dependencies(
            "Required dependencies (install if missing, skip if already installed and compatible):",
            &report.required,
            installed.as_ref(),
        );
        ui::success(&format!(
            "Successfully added components: {}",
            ui::bullet_list(&report.added)
        ));
    }
    if !report.skipped.is_empty() {
        ui::info(&format!(
            "Skipped components (already installed): {}",
            ui::bullet_list(&report.skipped)
        ));
    }
    if !report.invalid.is_empty() {
        ui::error(&format!(
            "Failed to add components (not found in the registry): {}",
            ui::bullet_list(&report.invalid)
        ));
    }
    for (name, err) in &report.failed {
        ui::error(&format!("Failed to install component '{name}': {err}"));
    }
    if !report.added.is_empty() {
        ui::blank();
        ui::info(&format!("Docs: {}", paths::COMPONENTS_DOC_URL));
    }

    Ok(())
}
