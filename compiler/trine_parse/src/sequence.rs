//! Heterogeneous sequencing.
//!
//! A tuple of parsers runs left to right, threading state and tokens, and
//! produces the tuple of their values:
//!
//! ```ignore
//! let pair = (literal('a'), item()).sequence(); // Parser<_, char, _, (char, char)>
//! ```
//!
//! The `appN` functions apply a function positionally to those values, and
//! the [`app!`](crate::app) macro picks the right one by argument count.

use trine_outcome::Outcome;

use crate::parser::{ParseResult, Parser};
use crate::TokenStream;

/// A tuple of parsers that can run in order.
pub trait Sequence<S, T, E> {
    /// The tuple of produced values.
    type Output;

    /// Run every parser left to right; abort at the first non-success.
    fn sequence(self) -> Parser<S, T, E, Self::Output>;
}

macro_rules! sequence_impls {
    ($($app:ident => $(($p:ident $a:ident $A:ident))+;)+) => {$(
        impl<S, T, E, $($A),+> Sequence<S, T, E> for ($(Parser<S, T, E, $A>,)+)
        where
            S: Clone + 'static,
            T: 'static,
            E: 'static,
            $($A: 'static,)+
        {
            type Output = ($($A,)+);

            fn sequence(self) -> Parser<S, T, E, Self::Output> {
                let ($($p,)+) = self;
                Parser::new(move |state: &S, input: &TokenStream<T>| {
                    let state = state.clone();
                    let rest = input.clone();
                    $(
                        let parsed = match $p.parse(&state, &rest) {
                            Outcome::Success(parsed) => parsed,
                            Outcome::Failure => return Outcome::Failure,
                            Outcome::Error(error) => return Outcome::Error(error),
                        };
                        let ParseResult { state, rest, result: $a } = parsed;
                    )+
                    Outcome::Success(ParseResult::new(state, rest, ($($a,)+)))
                })
            }
        }

        /// Run the parsers in order and apply `f` to their values.
        pub fn $app<S, T, E, $($A,)+ R, F>(
            f: F,
            $($p: Parser<S, T, E, $A>),+
        ) -> Parser<S, T, E, R>
        where
            S: Clone + 'static,
            T: 'static,
            E: 'static,
            $($A: 'static,)+
            R: 'static,
            F: Fn($($A),+) -> R + Send + Sync + 'static,
        {
            ($($p,)+).sequence().fmap(move |($($a,)+)| f($($a),+))
        }
    )+};
}

sequence_impls! {
    app1 => (p1 a1 A1);
    app2 => (p1 a1 A1) (p2 a2 A2);
    app3 => (p1 a1 A1) (p2 a2 A2) (p3 a3 A3);
    app4 => (p1 a1 A1) (p2 a2 A2) (p3 a3 A3) (p4 a4 A4);
    app5 => (p1 a1 A1) (p2 a2 A2) (p3 a3 A3) (p4 a4 A4) (p5 a5 A5);
    app6 => (p1 a1 A1) (p2 a2 A2) (p3 a3 A3) (p4 a4 A4) (p5 a5 A5) (p6 a6 A6);
}

/// Apply a function positionally to the values of parsers run in order.
///
/// `app!(f, p1, p2, p3)` is `app3(f, p1, p2, p3)`. Up to six parsers.
#[macro_export]
macro_rules! app {
    ($f:expr, $p1:expr $(,)?) => {
        $crate::app1($f, $p1)
    };
    ($f:expr, $p1:expr, $p2:expr $(,)?) => {
        $crate::app2($f, $p1, $p2)
    };
    ($f:expr, $p1:expr, $p2:expr, $p3:expr $(,)?) => {
        $crate::app3($f, $p1, $p2, $p3)
    };
    ($f:expr, $p1:expr, $p2:expr, $p3:expr, $p4:expr $(,)?) => {
        $crate::app4($f, $p1, $p2, $p3, $p4)
    };
    ($f:expr, $p1:expr, $p2:expr, $p3:expr, $p4:expr, $p5:expr $(,)?) => {
        $crate::app5($f, $p1, $p2, $p3, $p4, $p5)
    };
    ($f:expr, $p1:expr, $p2:expr, $p3:expr, $p4:expr, $p5:expr, $p6:expr $(,)?) => {
        $crate::app6($f, $p1, $p2, $p3, $p4, $p5, $p6)
    };
}
