//! The combinator algebra.
//!
//! Every combinator builds a new [`Parser`]; none touches an existing one.
//! The propagation rules all follow from [`Outcome`]:
//!
//! - `Failure` is recoverable: `alt`/`plus` try the next branch, `many0` stops,
//!   `optional` and `not0` succeed.
//! - `Error` is committed: it flows through `bind`, `seq`, `many0` and `not0`
//!   untouched, and only `catch_error`/`map_error` can see it.
//!
//! Unary and binary combinators are methods taking `self`, so chains read
//! left to right (`literal('a').many1().commit(err)`). Clone a parser to use
//! it in more than one place; clones share the same function.

use tracing::{debug, trace};
use trine_outcome::Outcome;

use crate::parser::{good, item, ParseResult, Parser};
use crate::sequence::Sequence;
use crate::TokenStream;


impl<S, T, E, A> Parser<S, T, E, A>
where
    S: Clone + 'static,
    T: 'static,
    E: 'static,
    A: 'static,
{
    /// Transform the value of a successful parse.
    pub fn fmap<B, F>(self, f: F) -> Parser<S, T, E, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Parser::new(move |state: &S, input: &TokenStream<T>| {
            self.parse(state, input)
                .fmap(|parsed| parsed.map_result(&f))
        })
    }

    /// Run `self`, then the parser `f` builds from its value, on the
    /// resulting state and tokens.
    pub fn bind<B, F>(self, f: F) -> Parser<S, T, E, B>
    where
        B: 'static,
        F: Fn(A) -> Parser<S, T, E, B> + Send + Sync + 'static,
    {
        Parser::new(move |state: &S, input: &TokenStream<T>| {
            self.parse(state, input).bind(|parsed| {
                let ParseResult {
                    state,
                    rest,
                    result,
                } = parsed;
                f(result).parse(&state, &rest)
            })
        })
    }

    /// Turn a success whose value fails `predicate` into a `Failure`.
    ///
    /// The rejected parse's state and tokens are dropped with it.
    pub fn check<P>(self, predicate: P) -> Parser<S, T, E, A>
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
    {
        Parser::new(
            move |state: &S, input: &TokenStream<T>| match self.parse(state, input) {
                Outcome::Success(parsed) if !predicate(&parsed.result) => Outcome::Failure,
                decided => decided,
            },
        )
    }

    /// Left-biased choice: `other` runs only when `self` fails.
    ///
    /// An `Error` from `self` is returned as-is; `other` is never tried.
    pub fn plus(self, other: Parser<S, T, E, A>) -> Parser<S, T, E, A> {
        Parser::new(move |state: &S, input: &TokenStream<T>| {
            self.parse(state, input).or_else(|| {
                trace!(position = input.offset(), "plus: backtrack");
                other.parse(state, input)
            })
        })
    }

    /// Zero or more repetitions, collected in order.
    ///
    /// Stops at the first `Failure` and never fails itself. An `Error` from
    /// the repeated parser aborts the loop and propagates.
    ///
    /// # Panics
    ///
    /// Panics if the repeated parser succeeds without consuming a token. Such
    /// a loop could never end, so it is treated as a grammar bug.
    pub fn many0(self) -> Parser<S, T, E, Vec<A>> {
        Parser::new(move |state: &S, input: &TokenStream<T>| {
            let mut values = Vec::new();
            let mut state = state.clone();
            let mut rest = input.clone();
            loop {
                match self.parse(&state, &rest) {
                    Outcome::Success(parsed) => {
                        if parsed.rest.len() >= rest.len() {
                            no_progress("many0", rest.offset());
                        }
                        values.push(parsed.result);
                        state = parsed.state;
                        rest = parsed.rest;
                    }
                    Outcome::Failure => {
                        trace!(
                            count = values.len(),
                            position = rest.offset(),
                            "many0: done"
                        );
                        return good(state, rest, values);
                    }
                    Outcome::Error(error) => return Outcome::Error(error),
                }
            }
        })
    }

    /// One or more repetitions. Fails when there is not even one.
    pub fn many1(self) -> Parser<S, T, E, Vec<A>> {
        self.many0().check(|values| !values.is_empty())
    }

    /// `self`, or `default` without consuming anything if `self` fails.
    pub fn optional(self, default: A) -> Parser<S, T, E, A>
    where
        A: Clone + Send + Sync,
    {
        self.plus(crate::pure(default))
    }

    /// Like [`Parser::optional`], reporting absence as `None`.
    pub fn maybe(self) -> Parser<S, T, E, Option<A>> {
        Parser::new(
            move |state: &S, input: &TokenStream<T>| match self.parse(state, input) {
                Outcome::Success(parsed) => Outcome::Success(parsed.map_result(Some)),
                Outcome::Failure => good(state.clone(), input.clone(), None),
                Outcome::Error(error) => Outcome::Error(error),
            },
        )
    }

    /// Zero-width negative lookahead.
    ///
    /// Succeeds with `()` on the original state and tokens when `self` fails,
    /// fails when `self` succeeds. An `Error` from `self` propagates.
    pub fn not0(self) -> Parser<S, T, E, ()> {
        Parser::new(
            move |state: &S, input: &TokenStream<T>| match self.parse(state, input) {
                Outcome::Success(_) => Outcome::Failure,
                Outcome::Failure => good(state.clone(), input.clone(), ()),
                Outcome::Error(error) => Outcome::Error(error),
            },
        )
    }

    /// Consume one raw token, provided `self` does not match here.
    ///
    /// Use `Itemizer::not1` to consume through a state-tracking item parser.
    pub fn not1(self) -> Parser<S, T, E, T>
    where
        T: Clone,
    {
        self.not0().seq2r(item())
    }

    /// Zero-width positive lookahead.
    ///
    /// Runs `self` and keeps its value and state, but rewinds the tokens.
    pub fn lookahead(self) -> Parser<S, T, E, A> {
        Parser::new(move |state: &S, input: &TokenStream<T>| {
            self.parse(state, input).fmap(|parsed| ParseResult {
                rest: input.clone(),
                ..parsed
            })
        })
    }

    /// Escalate a `Failure` of `self` into the committed error `error`.
    ///
    /// Successes and existing errors pass through unchanged.
    pub fn commit(self, error: E) -> Parser<S, T, E, A>
    where
        E: Clone + Send + Sync,
    {
        Parser::new(move |state: &S, input: &TokenStream<T>| {
            self.parse(state, input).or_else(|| {
                debug!(
                    position = input.offset(),
                    "commit: failure escalated to error"
                );
                Outcome::Error(error.clone())
            })
        })
    }

    /// Recover from a committed error by running the parser `handler`
    /// builds from it, on the original state and tokens.
    pub fn catch_error<E2, F>(self, handler: F) -> Parser<S, T, E2, A>
    where
        E2: 'static,
        F: Fn(E) -> Parser<S, T, E2, A> + Send + Sync + 'static,
    {
        Parser::new(
            move |state: &S, input: &TokenStream<T>| match self.parse(state, input) {
                Outcome::Success(parsed) => Outcome::Success(parsed),
                Outcome::Failure => Outcome::Failure,
                Outcome::Error(error) => handler(error).parse(state, input),
            },
        )
    }

    /// Transform the payload of a committed error.
    pub fn map_error<E2, F>(self, f: F) -> Parser<S, T, E2, A>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        Parser::new(move |state: &S, input: &TokenStream<T>| self.parse(state, input).map_err(&f))
    }

    /// Run `self` then `other`, producing both values.
    pub fn and<B: 'static>(self, other: Parser<S, T, E, B>) -> Parser<S, T, E, (A, B)> {
        (self, other).sequence()
    }

    /// Run `self` then `other`, keeping the value of `self`.
    pub fn seq2l<B: 'static>(self, other: Parser<S, T, E, B>) -> Parser<S, T, E, A> {
        self.and(other).fmap(|(left, _)| left)
    }

    /// Run `self` then `other`, keeping the value of `other`.
    pub fn seq2r<B: 'static>(self, other: Parser<S, T, E, B>) -> Parser<S, T, E, B> {
        self.and(other).fmap(|(_, right)| right)
    }
}

/// Try each parser in order from the same position.
///
/// Returns the first `Success` or `Error`; fails only when every
/// alternative fails. An empty list always fails.
pub fn alt<S, T, E, A, I>(parsers: I) -> Parser<S, T, E, A>
where
    S: 'static,
    T: 'static,
    E: 'static,
    A: 'static,
    I: IntoIterator<Item = Parser<S, T, E, A>>,
{
    let parsers: Vec<_> = parsers.into_iter().collect();
    Parser::new(move |state: &S, input: &TokenStream<T>| {
        for (index, parser) in parsers.iter().enumerate() {
            match parser.parse(state, input) {
                Outcome::Failure => trace!(index, position = input.offset(), "alt: backtrack"),
                decided => return decided,
            }
        }
        Outcome::Failure
    })
}

/// Run parsers of one value type in order, collecting their values.
///
/// Aborts at the first `Failure` or `Error`. For parsers of different value
/// types use [`Sequence`] on a tuple.
pub fn seq<S, T, E, A, I>(parsers: I) -> Parser<S, T, E, Vec<A>>
where
    S: Clone + 'static,
    T: 'static,
    E: 'static,
    A: 'static,
    I: IntoIterator<Item = Parser<S, T, E, A>>,
{
    let parsers: Vec<_> = parsers.into_iter().collect();
    Parser::new(move |state: &S, input: &TokenStream<T>| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut state = state.clone();
        let mut rest = input.clone();
        for parser in &parsers {
            match parser.parse(&state, &rest) {
                Outcome::Success(parsed) => {
                    values.push(parsed.result);
                    state = parsed.state;
                    rest = parsed.rest;
                }
                Outcome::Failure => return Outcome::Failure,
                Outcome::Error(error) => return Outcome::Error(error),
            }
        }
        good(state, rest, values)
    })
}

#[cold]
fn no_progress(combinator: &str, position: usize) -> ! {
    panic!(
        "{combinator}: repeated parser succeeded without consuming input at token {position}; \
         the loop would never end"
    )
}
