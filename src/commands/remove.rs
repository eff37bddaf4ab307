use std::path::Path;

use crate::config::installed::InstalledStore;
use crate::config::project::Config;
use crate::error::SuicError;
use crate::paths;
use crate::reconcile;
use crate::registry::deps;
use crate::ui::{self, Prompter, StdinPrompter};

pub fn run(components: Vec<String>) -> Result<(), SuicError> {
    let config = Config::load(&paths::config_path())?;

    // Resolves against the installed registry only; the remote catalog is
    // never consulted here.
    let mut store = InstalledStore::load(paths::installed_registry_path())?;
    if store.is_empty() {
        return Err(SuicError::NothingInstalled);
    }

    let prompter = StdinPrompter;
    let requested = if components.is_empty() {
        prompter.multi_select("Select components to remove:", &store.names())?
    } else {
        components
    };

    let target_dir = Path::new(&config.install_path);
    let report = reconcile::remove(&mut store, target_dir, &requested)?;

    ui::blank();
    if !report.removed.is_empty() {
        let installed = deps::installed_versions(&paths::package_manifest_path())?;
        ui::print_dependencies(
            "No longer required dependencies (uninstall if unused, skip if still needed):",
            &report.unused_deps,
            installed.as_ref(),
        );
        ui::success(&format!(
            "Successfully removed components: {}",
            ui::bullet_list(&report.removed)
        ));
    }
    if !report.invalid.is_empty() {
        ui::error(&format!(
            "Invalid components (not installed / not found): {}",
            ui::bullet_list(&report.invalid)
        ));
    }

    Ok(())
}
