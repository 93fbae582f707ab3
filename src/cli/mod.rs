use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::Ledger;

mod console;
mod menu;
mod present;

pub use console::{Console, OnReject};
pub use menu::*;
pub use present::*;

/// fintrack - Personal Finance Tracker
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "An interactive tracker for income and expense transactions")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let console = Console::new(io::stdin().lock(), io::stdout().lock(), io::stderr().lock());
        let mut controller = MenuController::new(Ledger::new(), console);
        controller.run().context("Terminal session failed")?;

        Ok(())
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "fintrack=debug"
    } else {
        "fintrack=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
