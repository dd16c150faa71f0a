//! Brace-balance checking on top of `trine_parse`.
//!
//! Characters are tokenized with their line and column, then parsed by a
//! recursive grammar that keeps the stack of open braces in the parser state.
//! Unmatched braces are committed errors carrying the offending brace:
//!
//! ```ignore
//! let error = trine_braces::check("a{b").unwrap_err();
//! assert_eq!(error.message(), "unmatched {");
//! assert_eq!(error.brace().position.to_string(), "1:2");
//! ```

pub mod commands;
pub mod error;
pub mod grammar;
pub mod state;
pub mod token;

pub use commands::{check_source, list_tokens, read_source, CheckConfig};
pub use error::{BraceError, CliError};
pub use grammar::{check, document, Block, Form, Summary};
pub use state::OpenBraces;
pub use token::{tokenize, Located};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
