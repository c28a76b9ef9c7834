//! Command-line configuration.

use crate::error::{ConvertError, Result};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// How much diagnostic detail a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Backfill, tax/tip, skip and summary diagnostics only.
    #[default]
    Quiet,

    /// Additionally traces every emitted line.
    Verbose,
}

impl Verbosity {
    /// The log filter this verbosity maps to. `RUST_LOG` may still override it.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }

    pub fn is_verbose(&self) -> bool {
        *self == Verbosity::Verbose
    }
}

impl FromStr for Verbosity {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "verbose" => Ok(Verbosity::Verbose),
            _ => Err(ConvertError::UnknownArgument(s.to_string())),
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub verbosity: Verbosity,
}

impl Config {
    /// Builds a config from command-line arguments, excluding the program name.
    ///
    /// Accepts `-q`/`--quiet`, `-v`/`--verbose` or `--verbosity <quiet|verbose>`
    /// and exactly one input path.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut input = None;
        let mut verbosity = Verbosity::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-q" | "--quiet" => verbosity = Verbosity::Quiet,
                "-v" | "--verbose" => verbosity = Verbosity::Verbose,
                "--verbosity" => {
                    let value = args.next().ok_or(ConvertError::MissingArgument)?;
                    verbosity = value.parse()?;
                }
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(ConvertError::UnknownArgument(arg));
                }
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                _ => return Err(ConvertError::UnknownArgument(arg)),
            }
        }

        Ok(Config {
            input: input.ok_or(ConvertError::MissingArgument)?,
            verbosity,
        })
    }
}
