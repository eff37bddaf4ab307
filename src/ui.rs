use std::io::{self, Write};

use colored::Colorize;

use crate::error::SuicError;
use crate::registry::deps::{self, DepMap, DependencySet, InstalledStatus, VersionConflict};

// ── Presenter ─────────────────────────────────────────────────────────────────

pub fn info(msg: &str) {
    println!("{} {msg}", "ℹ".bright_blue());
}

pub fn success(msg: &str) {
    println!("{} {msg}", "✔".bright_green());
}

pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "⚠".bright_yellow());
}

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "✖".bright_red());
}

pub fn blank() {
    println!();
}

/// Bullet list used in batch reports: "● Button, ● Card".
pub fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{} {}", "●".dimmed(), item.bright_cyan()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Dependency report for manual install/uninstall, annotated with the
/// installed version from package.json when one is readable.
pub fn print_dependencies(heading: &str, set: &DependencySet, installed: Option<&DepMap>) {
    if set.is_empty() {
        return;
    }
    blank();
    if installed.is_none() {
        warn("package.json not found. Cannot detect installed dependencies.");
    }
    warn(heading);
    blank();
    print_dep_kind("Dependencies", &set.dependencies, installed);
    print_dep_kind("Dev Dependencies", &set.dev_dependencies, installed);
    print_dep_kind("Peer Dependencies", &set.peer_dependencies, installed);
}

fn print_dep_kind(kind: &str, deps: &DepMap, installed: Option<&DepMap>) {
    if deps.is_empty() {
        return;
    }
    info(&format!("{kind}:"));
    for (package, range) in deps {
        let have = installed.and_then(|m| m.get(package)).map(String::as_str);
        let line = format!("  - {}@{range}", package.bright_cyan());
        match (deps::classify(range, have), have) {
            (InstalledStatus::NotInstalled, _) | (_, None) => println!("{line}"),
            (InstalledStatus::Exact, Some(version)) => {
                println!("{line} ({} {version})", "installed:".dimmed());
            }
            (InstalledStatus::SameMajor, Some(version)) => {
                println!("{line} ({} {version})", "installed, differs:".yellow());
            }
            (InstalledStatus::MajorMismatch, Some(version)) => {
                println!("{line} ({} {version})", "installed, major mismatch:".red());
            }
        }
    }
    blank();
}

pub fn print_conflicts(conflicts: &[VersionConflict]) {
    for conflict in conflicts {
        warn(&format!(
            "Conflicting version ranges for '{}': using {}, dropping {}",
            conflict.package, conflict.kept, conflict.dropped
        ));
    }
}

// ── Prompts ───────────────────────────────────────────────────────────────────

/// Interactive input provider. The reconciliation flows depend on this
/// trait so they can run against scripted fakes in tests.
pub trait Prompter {
    fn confirm(&self, message: &str) -> Result<bool, SuicError>;

    /// An empty selection fails with `Cancelled`; the invocation never
    /// proceeds with an empty operation set.
    fn multi_select(&self, message: &str, choices: &[String]) -> Result<Vec<String>, SuicError>;
}

pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, message: &str) -> Result<bool, SuicError> {
        print!("{message} [Y/n]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(!matches!(input.trim().to_lowercase().as_str(), "n" | "no"))
    }

    fn multi_select(&self, message: &str, choices: &[String]) -> Result<Vec<String>, SuicError> {
        println!("{message}");
        for (i, choice) in choices.iter().enumerate() {
            println!("  {}) {}", i + 1, choice.bright_cyan());
        }
        print!("Enter numbers separated by commas: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let mut selected: Vec<String> = Vec::new();
        for token in input.split([',', ' ']) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Ok(number) = token.parse::<usize>() {
                if let Some(choice) = number.checked_sub(1).and_then(|i| choices.get(i)) {
                    if !selected.contains(choice) {
                        selected.push(choice.clone());
                    }
                }
            }
        }

        if selected.is_empty() {
            return Err(SuicError::Cancelled);
        }
        Ok(selected)
    }
}
