//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::token::Located;

/// A committed brace-matching error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BraceError {
    /// A `{` still open at end of input.
    #[error("unmatched {{: {brace}")]
    UnmatchedOpen { brace: Located },
    /// A `}` with no open `{`.
    #[error("unmatched }}: {brace}")]
    UnmatchedClose { brace: Located },
}

impl BraceError {
    /// Short description without location.
    pub fn message(&self) -> &'static str {
        match self {
            BraceError::UnmatchedOpen { .. } => "unmatched {",
            BraceError::UnmatchedClose { .. } => "unmatched }",
        }
    }

    /// The offending brace.
    pub fn brace(&self) -> Located {
        match self {
            BraceError::UnmatchedOpen { brace } | BraceError::UnmatchedClose { brace } => *brace,
        }
    }
}

/// Failures of the `trine-braces` command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{}: {}", path.display(), error.brace().position, error.message())]
    Unbalanced { path: PathBuf, error: BraceError },
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Unbalanced { .. } => 1,
            CliError::Usage(_) | CliError::Io { .. } => 2,
        }
    }
}
