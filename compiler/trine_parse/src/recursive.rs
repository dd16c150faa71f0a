//! Self-referential grammar rules.
//!
//! A rule like `form := char | '{' form* '}'` needs to mention itself before
//! it exists. Two ways to tie the knot:
//!
//! - [`recursive`]: hands the builder a placeholder that resolves, at parse
//!   time, to the parser the builder returns. Built once.
//! - [`lazy`]: wraps a thunk that builds the parser on every invocation.
//!   Convenient for mutually recursive `fn`-defined rules.
//!
//! Both enter the inner parser through `ensure_sufficient_stack`, so input
//! nesting depth is bounded by memory rather than the native stack.

use std::sync::{Arc, OnceLock};

use trine_stack::ensure_sufficient_stack;

use crate::parser::Parser;
use crate::TokenStream;

/// Define a parser in terms of itself.
///
/// `build` receives a placeholder for the parser being defined and returns
/// its definition. The placeholder holds only a weak reference to the
/// definition, so the returned parser owns the grammar and no reference
/// cycle is formed.
///
/// # Panics
///
/// The placeholder panics if it runs after the returned parser (and every
/// clone of it) has been dropped.
pub fn recursive<S, T, E, A, F>(build: F) -> Parser<S, T, E, A>
where
    S: 'static,
    T: 'static,
    E: 'static,
    A: 'static,
    F: FnOnce(Parser<S, T, E, A>) -> Parser<S, T, E, A>,
{
    let cell: Arc<OnceLock<Parser<S, T, E, A>>> = Arc::new(OnceLock::new());
    let weak = Arc::downgrade(&cell);

    let placeholder = Parser::new(move |state: &S, input: &TokenStream<T>| {
        let Some(cell) = weak.upgrade() else {
            panic!("recursive parser used after its definition was dropped");
        };
        ensure_sufficient_stack(|| resolve(&cell).parse(state, input))
    });

    // A fresh cell cannot already be set.
    let _ = cell.set(build(placeholder));
    Parser::new(move |state: &S, input: &TokenStream<T>| resolve(&cell).parse(state, input))
}

fn resolve<S, T, E, A>(cell: &OnceLock<Parser<S, T, E, A>>) -> &Parser<S, T, E, A> {
    match cell.get() {
        Some(parser) => parser,
        None => panic!("recursive parser used while its definition was still being built"),
    }
}

/// Defer building a parser until it runs.
///
/// `thunk` is called on every invocation, so keep it cheap or cache inside.
pub fn lazy<S, T, E, A, F>(thunk: F) -> Parser<S, T, E, A>
where
    S: 'static,
    T: 'static,
    E: 'static,
    A: 'static,
    F: Fn() -> Parser<S, T, E, A> + Send + Sync + 'static,
{
    Parser::new(move |state: &S, input: &TokenStream<T>| {
        ensure_sufficient_stack(|| thunk().parse(state, input))
    })
}
