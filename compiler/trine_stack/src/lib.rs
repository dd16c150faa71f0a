//! Stack growth for recursive grammars.
//!
//! Iterative combinators (`many0`, `many1`, `seq`) keep stack depth flat, but
//! a recursive rule such as a nested block recurses once per nesting level of
//! the *input*. A document with tens of thousands of nested `{` would exhaust
//! the native stack. Recursive parser entry points run through
//! [`ensure_sufficient_stack`], which moves evaluation onto a fresh heap
//! segment when the remaining stack gets low.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack remains (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than 128KB remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
