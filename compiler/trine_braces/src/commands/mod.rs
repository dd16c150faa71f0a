//! Command implementations for the `trine-braces` binary.
//!
//! These return values and errors instead of printing so `main` owns all
//! output and exit codes.

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::error::CliError;
use crate::grammar::{check, Summary};
use crate::token::tokenize;

#[cfg(test)]
mod tests;

/// Options shared by the `check` and `tokens` commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Input file, or `-` for standard input.
    pub path: String,
    /// Print nothing on success.
    pub quiet: bool,
}

impl CheckConfig {
    /// Parse the arguments following the command name.
    ///
    /// Flags may come before or after the path.
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        let mut config = CheckConfig::default();
        let mut path = None;

        for arg in args {
            if arg == "--quiet" || arg == "-q" {
                config.quiet = true;
            } else if arg == "-" || !arg.starts_with('-') {
                if path.is_some() {
                    return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
                }
                path = Some(arg.clone());
            } else {
                return Err(CliError::Usage(format!("unknown option `{arg}`")));
            }
        }

        let Some(path) = path else {
            return Err(CliError::Usage("missing file path".to_string()));
        };
        config.path = path;
        Ok(config)
    }

    fn path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}

/// Read the configured input, from standard input when the path is `-`.
pub fn read_source(config: &CheckConfig) -> Result<String, CliError> {
    let read = if config.path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(&config.path)
    };
    let text = read.map_err(|source| CliError::Io {
        path: config.path_buf(),
        source,
    })?;
    debug!(path = %config.path, bytes = text.len(), "read source");
    Ok(text)
}

/// Check `source` for balanced braces.
pub fn check_source(config: &CheckConfig, source: &str) -> Result<Summary, CliError> {
    let forms = check(source).map_err(|error| CliError::Unbalanced {
        path: config.path_buf(),
        error,
    })?;
    Ok(Summary::of(&forms))
}

/// One line per character: `line:column` and the escaped character.
pub fn list_tokens(source: &str) -> Vec<String> {
    tokenize(source)
        .as_slice()
        .iter()
        .map(|token| format!("{}\t{:?}", token.position, token.ch))
        .collect()
}
