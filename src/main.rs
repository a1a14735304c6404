use anyhow::anyhow;
use clap::Parser;
use min_temp_predictor::cli::{run, Cli};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))?;

    let cli = Cli::parse();
    run(cli);
    Ok(())
}
