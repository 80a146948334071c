use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_TARGET;

#[derive(Parser)]
#[command(name = "projpatch", version)]
#[command(about = "Add project_id and project_name to the SMI article export")]
pub struct Args {
    /// File to patch; the result is written next to it with an `.updated` suffix
    #[arg(default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Dry run - show what would be changed without writing the `.updated` file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON report instead of status lines
    #[arg(long)]
    pub json: bool,
}
