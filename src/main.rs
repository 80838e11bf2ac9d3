mod cli;
mod error;
mod logging;
mod mail_sender;
mod settings;
mod task_composer;
mod tests;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.log_level)?;
    cli::entrypoint(cli).await?;
    Ok(())
}
