//! The parser value and its primitives.
//!
//! A `Parser<S, T, E, A>` is an immutable, shareable wrapper around a pure
//! function
//!
//! ```text
//! (&S, &TokenStream<T>) -> Outcome<ParseResult<S, T, A>, E>
//! ```
//!
//! where `S` is the user state threaded alongside the tokens, `T` the token
//! type, `E` the committed-error payload and `A` the produced value.
//!
//! Parsers take their inputs by reference and return fresh values, so a
//! `Failure` or `Error` can never leak partial consumption: the caller still
//! holds the original state and stream.

use std::fmt;
use std::sync::Arc;

use tracing::trace;
use trine_outcome::Outcome;

use crate::TokenStream;


type ParseFn<S, T, E, A> =
    dyn Fn(&S, &TokenStream<T>) -> Outcome<ParseResult<S, T, A>, E> + Send + Sync;

/// Everything a successful parse hands to its continuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult<S, T, A> {
    /// User state after the parse.
    pub state: S,
    /// Tokens not yet consumed. Always a suffix of the input.
    pub rest: TokenStream<T>,
    /// The produced value.
    pub result: A,
}

impl<S, T, A> ParseResult<S, T, A> {
    pub fn new(state: S, rest: TokenStream<T>, result: A) -> Self {
        ParseResult {
            state,
            rest,
            result,
        }
    }

    /// Replace the value, keeping state and rest.
    pub fn map_result<B, F: FnOnce(A) -> B>(self, f: F) -> ParseResult<S, T, B> {
        ParseResult {
            state: self.state,
            rest: self.rest,
            result: f(self.result),
        }
    }
}

/// An immutable parser.
///
/// Cloning shares the underlying function. `Parser` is `Send + Sync`: one
/// grammar can serve many threads, each with its own input.
pub struct Parser<S, T, E, A> {
    parse_fn: Arc<ParseFn<S, T, E, A>>,
}

impl<S, T, E, A> Parser<S, T, E, A> {
    /// Wrap a parse function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&S, &TokenStream<T>) -> Outcome<ParseResult<S, T, A>, E> + Send + Sync + 'static,
    {
        Parser {
            parse_fn: Arc::new(f),
        }
    }

    /// Run the parser on `input` starting from `state`.
    #[inline]
    pub fn parse(&self, state: &S, input: &TokenStream<T>) -> Outcome<ParseResult<S, T, A>, E> {
        (self.parse_fn)(state, input)
    }
}

impl<S, T, E, A> Clone for Parser<S, T, E, A> {
    fn clone(&self) -> Self {
        Parser {
            parse_fn: Arc::clone(&self.parse_fn),
        }
    }
}

impl<S, T, E, A> fmt::Debug for Parser<S, T, E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

#[inline]
pub(crate) fn good<S, T, A, E>(
    state: S,
    rest: TokenStream<T>,
    result: A,
) -> Outcome<ParseResult<S, T, A>, E> {
    Outcome::Success(ParseResult::new(state, rest, result))
}

// === Primitives ===

/// Consume exactly one token, producing it. Fails on empty input.
pub fn item<S, T, E>() -> Parser<S, T, E, T>
where
    S: Clone + 'static,
    T: Clone + 'static,
    E: 'static,
{
    Parser::new(|state: &S, input: &TokenStream<T>| match input.split_first() {
        Some((token, rest)) => {
            trace!(position = input.offset(), "item");
            good(state.clone(), rest, token.clone())
        }
        None => Outcome::Failure,
    })
}

/// Always succeed with `value`, consuming nothing.
pub fn pure<S, T, E, A>(value: A) -> Parser<S, T, E, A>
where
    S: Clone + 'static,
    T: 'static,
    E: 'static,
    A: Clone + Send + Sync + 'static,
{
    Parser::new(move |state: &S, input: &TokenStream<T>| {
        good(state.clone(), input.clone(), value.clone())
    })
}

/// Always fail (recoverably).
pub fn zero<S, T, E, A>() -> Parser<S, T, E, A>
where
    S: 'static,
    T: 'static,
    E: 'static,
    A: 'static,
{
    Parser::new(|_: &S, _: &TokenStream<T>| Outcome::Failure)
}

/// Always produce the committed error `error`.
pub fn error<S, T, E, A>(error: E) -> Parser<S, T, E, A>
where
    S: 'static,
    T: 'static,
    E: Clone + Send + Sync + 'static,
    A: 'static,
{
    Parser::new(move |_: &S, _: &TokenStream<T>| Outcome::Error(error.clone()))
}

// === Stream and state access ===

/// Produce the remaining token stream without consuming it.
pub fn get<S, T, E>() -> Parser<S, T, E, TokenStream<T>>
where
    S: Clone + 'static,
    T: 'static,
    E: 'static,
{
    Parser::new(|state: &S, input: &TokenStream<T>| {
        good(state.clone(), input.clone(), input.clone())
    })
}

/// Replace the remaining token stream with `tokens`.
pub fn put<S, T, E>(tokens: TokenStream<T>) -> Parser<S, T, E, ()>
where
    S: Clone + 'static,
    T: Send + Sync + 'static,
    E: 'static,
{
    Parser::new(move |state: &S, _: &TokenStream<T>| good(state.clone(), tokens.clone(), ()))
}

/// Produce the current user state.
pub fn get_state<S, T, E>() -> Parser<S, T, E, S>
where
    S: Clone + 'static,
    T: 'static,
    E: 'static,
{
    Parser::new(|state: &S, input: &TokenStream<T>| {
        good(state.clone(), input.clone(), state.clone())
    })
}

/// Replace the user state with `state`.
pub fn put_state<S, T, E>(state: S) -> Parser<S, T, E, ()>
where
    S: Clone + Send + Sync + 'static,
    T: 'static,
    E: 'static,
{
    Parser::new(move |_: &S, input: &TokenStream<T>| good(state.clone(), input.clone(), ()))
}

/// Replace the user state with `f(state)`.
pub fn update_state<S, T, E, F>(f: F) -> Parser<S, T, E, ()>
where
    S: 'static,
    T: 'static,
    E: 'static,
    F: Fn(&S) -> S + Send + Sync + 'static,
{
    Parser::new(move |state: &S, input: &TokenStream<T>| good(f(state), input.clone(), ()))
}
