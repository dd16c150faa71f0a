//! Three-way outcome for backtracking parsers.
//!
//! This crate provides `Outcome`, the result type every `trine` parser
//! returns. It separates two kinds of "did not work":
//!
//! | Variant | Payload | Meaning |
//! |---------|---------|---------|
//! | `Success` | value | Parsed; continue with the value |
//! | `Failure` | none | This alternative does not apply; try the next one |
//! | `Error` | `E` | Committed error; stop, never retry siblings |
//!
//! ## Design Rationale
//!
//! With only success/failure, a parser cannot say "stop trying siblings,
//! this input is malformed" without ad-hoc flags. The third variant carries
//! that signal. The whole algebra hinges on [`Outcome::plus`]: only `Failure`
//! falls through to the alternative, so an `Error` always reaches the caller
//! unless someone intercepts it on purpose ([`Outcome::map_err`],
//! `catch_error` in the parser crate).
//!
//! ## Integration
//!
//! Convert to `Result<T, Rejection<E>>` via [`Outcome::into_result`] or the
//! `From` impl when plain `?` propagation is wanted.

use thiserror::Error;

/// A three-way result: success, recoverable failure, or committed error.
///
/// # Type Parameters
///
/// - `T`: the success value
/// - `E`: the error payload chosen by the grammar author
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T, E> {
    /// Succeeded with a value.
    Success(T),

    /// Did not match. Carries nothing; the caller may backtrack.
    Failure,

    /// Committed error. Must not be discarded by backtracking.
    Error(E),
}

impl<T, E> Outcome<T, E> {
    // === Constructors ===

    /// Wrap a value as `Success`.
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::Success(value)
    }

    /// The canonical `Failure`.
    #[inline]
    pub fn zero() -> Self {
        Self::Failure
    }

    /// Create a committed error.
    #[cold]
    pub fn error(error: E) -> Self {
        Self::Error(error)
    }

    // === Predicates ===

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    /// Returns `true` for `Error`.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Short tag for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Failure => "failure",
            Self::Error(_) => "error",
        }
    }

    // === Transformations ===

    /// Map the success value. `Failure` and `Error` pass through.
    pub fn fmap<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure => Outcome::Failure,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Chain a computation on the success value.
    ///
    /// `Failure` and `Error` propagate untouched; `f` is not called.
    pub fn bind<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure => Outcome::Failure,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Apply a wrapped function to a wrapped argument.
    ///
    /// The function side decides first: a non-`Success` here is returned
    /// without looking at `arg`.
    pub fn ap<A, U>(self, arg: Outcome<A, E>) -> Outcome<U, E>
    where
        T: FnOnce(A) -> U,
    {
        match self {
            Self::Success(f) => arg.fmap(f),
            Self::Failure => Outcome::Failure,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Left-biased choice.
    ///
    /// Returns `other` only when `self` is `Failure`. `Success` and `Error`
    /// both short-circuit.
    pub fn plus(self, other: Self) -> Self {
        match self {
            Self::Failure => other,
            decided => decided,
        }
    }

    /// Lazy form of [`Outcome::plus`]: `f` runs only on `Failure`.
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Self::Failure => f(),
            decided => decided,
        }
    }

    /// Transform the error payload. `Success` and `Failure` pass through.
    pub fn map_err<E2, F: FnOnce(E) -> E2>(self, f: F) -> Outcome<T, E2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure => Outcome::Failure,
            Self::Error(error) => Outcome::Error(f(error)),
        }
    }

    // === Extraction ===

    /// Convert to `Option`, discarding any error payload.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure | Self::Error(_) => None,
        }
    }

    /// Convert to `Result`, folding both non-success variants into [`Rejection`].
    pub fn into_result(self) -> Result<T, Rejection<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure => Err(Rejection::NoMatch),
            Self::Error(error) => Err(Rejection::Fatal(error)),
        }
    }

    /// Unwrap the success value, panicking otherwise.
    ///
    /// # Panics
    /// Panics on `Failure` or `Error`.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: std::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure => panic!("called `Outcome::unwrap()` on `Failure`"),
            Self::Error(error) => panic!("called `Outcome::unwrap()` on `Error`: {error:?}"),
        }
    }
}

/// Why an [`Outcome`] did not produce a value, as a standard error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection<E> {
    /// The input did not match (an `Outcome::Failure`).
    #[error("input did not match")]
    NoMatch,

    /// A committed error (an `Outcome::Error`).
    #[error("{0}")]
    Fatal(E),
}

impl<E> Rejection<E> {
    /// The committed error payload, if any.
    pub fn fatal(self) -> Option<E> {
        match self {
            Self::NoMatch => None,
            Self::Fatal(error) => Some(error),
        }
    }
}

// === Conversions ===

impl<T, E> From<Outcome<T, E>> for Result<T, Rejection<E>> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok` becomes `Success`, `Err` becomes a committed `Error`.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
