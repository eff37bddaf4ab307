use clap::{Parser, Subcommand};

use crate::paths;

#[derive(Parser)]
#[command(name = "suic-cli", version, about = "Manage and install UI components effortlessly")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print the underlying error causes on failure
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Set up Simple UI Components in your project
    Init {
        /// Custom installation directory
        #[arg(short, long, default_value = paths::DEFAULT_INSTALL_PATH)]
        install_path: String,
    },

    /// Add one or more components to your project
    Add {
        /// Component names. Omit to select interactively.
        components: Vec<String>,
    },

    /// Remove one or more components from your project
    Remove {
        /// Component names. Omit to select interactively.
        components: Vec<String>,
    },

    /// Show all available components with descriptions
    List,
}
