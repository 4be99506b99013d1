use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tfws", version)]
#[command(about = "Pick, switch to, or delete a Terraform workspace from an interactive list.")]
pub struct Cli {
    /// Show debug output and write a debug log.
    #[arg(long)]
    pub debug: bool,

    /// Run Terraform against this directory (passed through as -chdir).
    #[arg(short = 'C', long = "chdir", value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Terraform-compatible binary to run.
    #[arg(long, env = "TFWS_TERRAFORM", value_name = "BIN")]
    pub terraform: Option<String>,
}
