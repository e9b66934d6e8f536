//! Command implementations for Infat CLI

pub mod apply;
pub mod completions;
pub mod info;
pub mod init;
pub mod set;
pub mod version;

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{InfatError, Result};

/// Options every command sees, taken from the global flags
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub robust: bool,
    pub timeout: Duration,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            robust: cli.robust,
            timeout: Duration::from_secs(cli.timeout),
        }
    }
}

/// The one `(flag, value)` pair that was given out of mutually exclusive options
pub(crate) fn exactly_one<'a>(
    options: &[(&'static str, Option<&'a str>)],
) -> Result<(&'static str, &'a str)> {
    let given: Vec<(&'static str, &'a str)> = options
        .iter()
        .filter_map(|(flag, value)| value.map(|v| (*flag, v)))
        .collect();

    match given.as_slice() {
        [] => {
            let flags: Vec<&str> = options.iter().map(|(flag, _)| *flag).collect();
            Err(InfatError::MissingOption {
                message: format!("one of {} is required", flags.join(", ")),
            })
        }
        [single] => Ok(*single),
        many => {
            let flags: Vec<&str> = many.iter().map(|(flag, _)| *flag).collect();
            Err(InfatError::ConflictingOptions {
                message: format!("only one of {} may be given", flags.join(", ")),
            })
        }
    }
}
