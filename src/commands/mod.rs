pub mod add;
pub mod init;
pub mod list;
pub mod remove;

use crate::cli::args::Command;
use crate::error::SuicError;

pub async fn dispatch(command: Command) -> Result<(), SuicError> {
    match command {
        Command::Init { install_path } => init::run(&install_path).await,
        Command::Add { components } => add::run(components).await,
        Command::Remove { components } => remove::run(components),
        Command::List => list::run().await,
    }
}
