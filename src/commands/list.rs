use colored::Colorize;

use crate::error::SuicError;
use crate::fetcher::http::HttpSource;
use crate::paths;
use crate::ui;

pub async fn run() -> Result<(), SuicError> {
    let source = HttpSource::new(paths::BASE_URL)?;
    let catalog = source.fetch_catalog().await?;
    if catalog.is_empty() {
        return Err(SuicError::EmptyCatalog);
    }

    ui::blank();
    println!("Available components:");
    println!("{}", "═".repeat(21));
    ui::blank();

    for entry in &catalog {
        println!("  {} {}", "●".dimmed(), entry.name.bright_blue());
        match &entry.description {
            Some(description) => println!("      {description}"),
            None => println!("      {}", "(no description)".dimmed()),
        }
        if let Some(url) = &entry.doc_url {
            println!("      {} {url}", "Docs:".dimmed());
        }
        ui::blank();
    }

    ui::info("Use 'suic-cli add [components...]' to install.");
    ui::info("Or run 'suic-cli add' to select from the list.");
    Ok(())
}
