pub mod input;

use crate::{
    align::AlignParams,
    error::{Error, Result},
};
use clap::{value_parser, Parser};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

pub use input::Input;

#[derive(Parser, Serialize, Deserialize)]
#[clap(author, about)]
pub struct Cli {
    #[clap(flatten)]
    pub input: Input,

    #[clap(flatten)]
    pub params: AlignParams,

    /// JSON file with alignment parameters. Replaces the parameters above.
    #[arg(long = "params", value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub params_file: Option<PathBuf>,

    /// Write all results as a JSON array to this file.
    #[arg(short, long, value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Print less. Pass twice for summary line only.
    ///
    /// Do not print the alignment of each pair, but instead overwrite a running summary line.
    /// Pass twice to only print the final summary line.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,

    /// Log more. Pass once for info, twice for debug messages.
    ///
    /// `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Stop aligning new pairs after this timeout.
    #[arg(long, value_parser = parse_duration::parse, hide_short_help = true)]
    pub timeout: Option<Duration>,
}

impl Cli {
    /// The parameters to align with: from `--params` when given, otherwise
    /// from the command line.
    pub fn align_params(&self) -> Result<AlignParams> {
        let Some(path) = &self.params_file else {
            return Ok(self.params);
        };
        let data = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let params: AlignParams = serde_json::from_str(&data).map_err(|source| Error::Config {
            path: path.clone(),
            source,
        })?;
        if params.max_length == 0 {
            return Err(Error::ZeroMaxLength);
        }
        Ok(params)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
