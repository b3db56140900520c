// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, Level};

use crate::input;
use crate::telemetry::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "unshard")]
#[command(about = "Reconstructs polynomial-shared secrets from base-encoded share sets", long_about = None)]
pub struct Cli {
    /// Share set files, one reconstructed secret per file
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Indicate log levels by adding additional `-v` arguments. Eg. `unshard -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count
    )]
    pub verbose: u8,

    /// Silence all log output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose"
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn execute(self) -> Result<()> {
        setup_tracing(self.log_level());

        let labelled = self.files.len() > 1;
        for file in &self.files {
            let share_set = input::load_share_set(file)
                .with_context(|| format!("Failed to load share set {}", file.display()))?;
            let (records, threshold) = share_set.into_records()?;
            info!(
                file = %file.display(),
                shares = records.len(),
                threshold,
                "loaded share set"
            );

            let secret = unshard_recover::reconstruct_from_records(&records, threshold)
                .with_context(|| format!("Failed to reconstruct secret from {}", file.display()))?;

            if labelled {
                println!("{}: {}", file.display(), secret);
            } else {
                println!("{}", secret);
            }
        }
        Ok(())
    }
}
