//! Token-level parsers derived from a base item parser.
//!
//! Every token-matching parser (`literal`, `satisfy`, `string`, `one_of`,
//! `not1`) bottoms out in "consume one token". An [`Itemizer`] fixes *how*
//! that token is consumed and derives the whole family from it, so the same
//! grammar code works over:
//!
//! | Constructor | State | Effect of each consumed token |
//! |-------------|-------|-------------------------------|
//! | [`Itemizer::basic`] | any `S` | none |
//! | [`Itemizer::position`] | [`Position`] | advance line/column |
//! | [`Itemizer::count`] | `usize` | increment |
//!
//! A custom policy is any `Parser<S, T, E, T>` that consumes exactly one
//! token on success, passed to [`Itemizer::new`].

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::combinators::seq;
use crate::parser::{item, pure, update_state, Parser};


/// The `literal`/`satisfy`/`string`/`one_of`/`not1` family over one item parser.
pub struct Itemizer<S, T, E> {
    item: Parser<S, T, E, T>,
}

impl<S, T, E> Clone for Itemizer<S, T, E> {
    fn clone(&self) -> Self {
        Itemizer {
            item: self.item.clone(),
        }
    }
}

impl<S, T, E> fmt::Debug for Itemizer<S, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Itemizer").finish_non_exhaustive()
    }
}

impl<S, T, E> Itemizer<S, T, E>
where
    S: Clone + 'static,
    T: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Derive the family from `item`, which must consume exactly one token
    /// when it succeeds.
    pub fn new(item: Parser<S, T, E, T>) -> Self {
        Itemizer { item }
    }

    /// Raw consumption; state is left alone.
    pub fn basic() -> Self {
        Itemizer::new(item())
    }

    /// The base item parser.
    pub fn item(&self) -> Parser<S, T, E, T> {
        self.item.clone()
    }

    /// Match one token equal to `expected`.
    pub fn literal(&self, expected: T) -> Parser<S, T, E, T>
    where
        T: PartialEq,
    {
        self.item().check(move |token| *token == expected)
    }

    /// Match one token that `eq` considers equal to `expected`.
    ///
    /// For tokens carrying extra data (locations, trivia) that plain `==`
    /// would compare too.
    pub fn literal_by<F>(&self, expected: T, eq: F) -> Parser<S, T, E, T>
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.item().check(move |token| eq(&expected, token))
    }

    /// Match one token satisfying `predicate`.
    pub fn satisfy<P>(&self, predicate: P) -> Parser<S, T, E, T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.item().check(predicate)
    }

    /// Match `expected` token by token, producing the expected sequence.
    pub fn string<I>(&self, expected: I) -> Parser<S, T, E, Vec<T>>
    where
        T: PartialEq,
        I: IntoIterator<Item = T>,
    {
        let expected: Vec<T> = expected.into_iter().collect();
        let literals = expected.iter().cloned().map(|token| self.literal(token));
        seq(literals).seq2r(pure(expected))
    }

    /// Match one token that is a member of `set`.
    pub fn one_of<I>(&self, set: I) -> Parser<S, T, E, T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item = T>,
    {
        let set: FxHashSet<T> = set.into_iter().collect();
        self.satisfy(move |token| set.contains(token))
    }

    /// Consume one token through this item parser, provided `parser` does
    /// not match here.
    pub fn not1<A: 'static>(&self, parser: Parser<S, T, E, A>) -> Parser<S, T, E, T> {
        parser.not0().seq2r(self.item())
    }
}

impl<T, E> Itemizer<usize, T, E>
where
    T: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Count consumed tokens in the state.
    pub fn count() -> Self {
        Itemizer::new(item().seq2l(update_state(|count: &usize| count + 1)))
    }
}

impl<E: 'static> Itemizer<Position, char, E> {
    /// Track line and column of character tokens in the state.
    pub fn position() -> Self {
        Itemizer::new(item().bind(|c: char| {
            update_state(move |position: &Position| position.bump(c)).seq2r(pure(c))
        }))
    }
}

/// A 1-based line/column location in character input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Line 1, column 1.
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// The position after consuming `c` here.
    #[must_use]
    pub fn bump(self, c: char) -> Self {
        if c == '\n' {
            Position {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
