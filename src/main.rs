use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::answers::*;
pub use domain::models::*;
pub use domain::questions::*;
pub use services::evaluator::*;
pub use services::output::*;
pub use services::render::*;
pub use services::session::*;
pub use services::validation::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);

    if handle_quiz_command(&cli)? {
        return Ok(());
    }
    if handle_runtime_commands(&cli)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}
