//! Monadic parser combinators over arbitrary token sequences.
//!
//! Parsers are immutable values wrapping pure functions from
//! `(state, tokens)` to an [`Outcome`]:
//!
//! - `Success` carries a [`ParseResult`]: the new state, the unconsumed
//!   tokens and the produced value.
//! - `Failure` means "this alternative does not apply"; choice combinators
//!   backtrack and try the next one.
//! - `Error` is committed: no sibling alternative is tried, and the payload
//!   reaches [`run`]'s caller unless `catch_error`/`map_error` intervene.
//!
//! `commit` is the bridge between the two: it turns a `Failure` of a parser
//! into an `Error`, marking the point after which the input is known to be
//! malformed rather than merely different.
//!
//! # Example
//!
//! ```ignore
//! use trine_parse::{run, Itemizer, Outcome};
//!
//! let chars = Itemizer::<(), char, &str>::basic();
//! let word = chars.string("let".chars()).commit("expected `let`");
//! match run(&word, "let x", ()) {
//!     Outcome::Success(parsed) => assert_eq!(parsed.rest.len(), 2),
//!     Outcome::Failure | Outcome::Error(_) => unreachable!(),
//! }
//! ```
//!
//! # Organization
//!
//! - [`parser`]: the `Parser` type, `item`, `pure`/`zero`/`error`, stream and
//!   state access
//! - [`combinators`]: `fmap`, `bind`, `check`, `plus`/`alt`, `many0`/`many1`,
//!   `seq`, `optional`, `not0`/`not1`, `lookahead`, `commit`, error handlers
//! - [`sequence`]: tuple sequencing and `app!`
//! - [`recursive`]: `recursive` and `lazy` for self-referential rules
//! - [`itemizer`]: `literal`/`satisfy`/`string`/`one_of`/`not1` over a chosen
//!   item parser

pub mod combinators;
pub mod itemizer;
pub mod parser;
pub mod recursive;
pub mod sequence;
mod stream;

pub use combinators::{alt, seq};
pub use itemizer::{Itemizer, Position};
pub use parser::{
    error, get, get_state, item, pure, put, put_state, update_state, zero, ParseResult, Parser,
};
pub use recursive::{lazy, recursive};
pub use sequence::{app1, app2, app3, app4, app5, app6, Sequence};
pub use stream::TokenStream;
pub use trine_outcome::{Outcome, Rejection};

use tracing::debug;

/// Run `parser` over `tokens` from the initial `state`.
///
/// Returns the full outcome: `Success` with final state, remaining tokens and
/// value; `Failure` if the input did not match; or the committed `Error`.
pub fn run<S, T, E, A>(
    parser: &Parser<S, T, E, A>,
    tokens: impl Into<TokenStream<T>>,
    state: S,
) -> Outcome<ParseResult<S, T, A>, E> {
    let input = tokens.into();
    debug!(tokens = input.len(), "run");
    let outcome = parser.parse(&state, &input);
    let consumed = match &outcome {
        Outcome::Success(parsed) => input.len().saturating_sub(parsed.rest.len()),
        Outcome::Failure | Outcome::Error(_) => 0,
    };
    debug!(outcome = outcome.tag(), consumed, "run finished");
    outcome
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
