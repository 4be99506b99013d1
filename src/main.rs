// tfws — Terraform workspace picker
// Lists workspaces in a full-screen list; Enter selects, d deletes, Esc quits.

mod action;
mod app;
mod cli;
mod config;
mod error;
mod event;
mod log;
mod model;
mod provider;
mod session;
mod tui;
mod ui;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::{
    app::{Outcome, Picker},
    cli::Cli,
    config::{global::GlobalConfig, Settings},
    error::Error,
    event::CrosstermEvents,
    provider::{Provider, TerraformProvider},
    tui::CrosstermSurface,
};

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    if let Err(e) = run(cli) {
        if debug {
            eprintln!("Error: {e:?}");
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GlobalConfig::load()?;
    let settings = Settings::resolve(cli, config);
    if let Some(path) = log::init(settings.debug, settings.log_file.as_deref())? {
        debug!(path = %path.display(), "logging enabled");
    }

    let mut provider = TerraformProvider::new(settings.terraform.clone(), settings.chdir.clone());
    let items = provider.list().context("failed to get workspaces")?;
    let label = module_label(settings.chdir.as_deref())?;

    tui::install_panic_hook();
    let surface = CrosstermSurface::init().map_err(Error::SurfaceInit)?;
    let report = session::run(Picker::new(items, label, surface, provider, CrosstermEvents))?;

    // The terminal is restored by now, so provider output can go to stdout.
    if !report.output.is_empty() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&report.output)?;
        stdout.flush()?;
    }

    match report.outcome {
        Outcome::Cancelled => {
            debug!("cancelled");
            Ok(())
        }
        Outcome::Selected(name) => {
            info!(workspace = %name, "switched workspace");
            Ok(())
        }
        Outcome::Failed(e) => Err(e).context("failed to show UI"),
    }
}

/// Module root shown on the first row.
fn module_label(chdir: Option<&Path>) -> Result<String> {
    let cwd = std::env::current_dir().context("failed to get module root")?;
    let root = match chdir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    Ok(root.display().to_string())
}
