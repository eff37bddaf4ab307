use clap::Parser;

use suic_cli::cli::args::Cli;
use suic_cli::commands;
use suic_cli::ui;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = commands::dispatch(cli.command).await {
        ui::error(&e.to_string());
        if verbose {
            let mut cause = std::error::Error::source(&e);
            while let Some(err) = cause {
                ui::error(&format!("  caused by: {err}"));
                cause = err.source();
            }
        }
        std::process::exit(1);
    }
}
