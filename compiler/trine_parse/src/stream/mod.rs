//! Immutable token streams.
//!
//! A `TokenStream` is a shared, immutable token buffer plus an offset. Parsers
//! never mutate it: consuming a token produces a new stream one position
//! further along, and backtracking is just keeping the old value around.
//! Cloning is an `Arc` bump.

use std::fmt;
use std::sync::Arc;

/// The not-yet-consumed suffix of a token sequence.
pub struct TokenStream<T> {
    tokens: Arc<[T]>,
    /// Index of the first unconsumed token in `tokens`.
    offset: usize,
}

impl<T> TokenStream<T> {
    /// Create a stream positioned at the first token.
    pub fn new(tokens: impl Into<Arc<[T]>>) -> Self {
        TokenStream {
            tokens: tokens.into(),
            offset: 0,
        }
    }

    /// The remaining tokens.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.tokens[self.offset..]
    }

    /// Number of remaining tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len() - self.offset
    }

    /// Returns `true` when every token has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first remaining token in the underlying buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Peek at the next token.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.tokens.get(self.offset)
    }

    /// Split off the next token, returning it with the stream after it.
    pub fn split_first(&self) -> Option<(&T, TokenStream<T>)> {
        let token = self.tokens.get(self.offset)?;
        let rest = TokenStream {
            tokens: Arc::clone(&self.tokens),
            offset: self.offset + 1,
        };
        Some((token, rest))
    }

    /// Returns `true` if `self` is a suffix of `other` (same buffer, not behind it).
    pub fn is_suffix_of(&self, other: &TokenStream<T>) -> bool {
        Arc::ptr_eq(&self.tokens, &other.tokens) && self.offset >= other.offset
    }
}

impl<T> Clone for TokenStream<T> {
    fn clone(&self) -> Self {
        TokenStream {
            tokens: Arc::clone(&self.tokens),
            offset: self.offset,
        }
    }
}

impl<T> Default for TokenStream<T> {
    fn default() -> Self {
        TokenStream::new(Vec::new())
    }
}

/// Streams compare by their remaining tokens, not by buffer identity.
impl<T: PartialEq> PartialEq for TokenStream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for TokenStream<T> {}

impl<T: fmt::Debug> fmt::Debug for TokenStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> From<Vec<T>> for TokenStream<T> {
    fn from(tokens: Vec<T>) -> Self {
        TokenStream::new(tokens)
    }
}

impl<T: Clone> From<&[T]> for TokenStream<T> {
    fn from(tokens: &[T]) -> Self {
        TokenStream::new(tokens)
    }
}

impl From<&str> for TokenStream<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<T> FromIterator<T> for TokenStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TokenStream::new(iter.into_iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests;
