use anyhow::Result;
use clap::Parser;
use tracing::debug;

use projpatch::cli::Args;
use projpatch::commands::execute_patch;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!("Target: {}", args.target.display());

    execute_patch(&args.target, args.dry_run, args.json).await?;

    Ok(())
}
