//! CLI argument definitions
//!
//! Command-line options and how they override the directory's parameters.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::Params;

#[derive(Debug, Parser)]
#[command(name = "report-tracker")]
#[command(
    about = "Track which report folders have been processed in a timestamped tracker file",
    version
)]
pub(crate) struct Cli {
    /// Directory containing report folders and params.toml
    #[arg(short, long, value_name = "DIR")]
    pub(crate) path: PathBuf,

    /// Write the merged tracker (true or false; a bare -w means false)
    #[arg(
        short = 'w',
        long = "write-to-file",
        value_name = "BOOL",
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "false",
        action = ArgAction::Set
    )]
    pub(crate) write_to_file: bool,

    /// Union sample ids across all data files of a report
    #[arg(long)]
    pub(crate) accumulate_samples: bool,

    /// Fixed tracker filename inside DIR (default: timestamped snapshots)
    #[arg(long, value_name = "FILE")]
    pub(crate) tracker: Option<String>,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Apply CLI overrides to the loaded parameters (CLI takes precedence)
    pub(crate) fn merge_params(&self, mut params: Params) -> Params {
        // Boolean flags only ever switch a parameter on
        if self.accumulate_samples {
            params.accumulate_samples = true;
        }
        if self.tracker.is_some() {
            params.tracker_file = self.tracker.clone();
        }
        params
    }
}
