use super::*;
use pretty_assertions::assert_eq;

type O = Outcome<i32, &'static str>;

#[test]
fn test_constructors() {
    assert_eq!(O::pure(3), Outcome::Success(3));
    assert_eq!(O::zero(), Outcome::Failure);
    assert_eq!(O::error("bad"), Outcome::Error("bad"));
    assert!(O::pure(3).is_success());
    assert!(O::zero().is_failure());
    assert!(O::error("bad").is_error());
}

#[test]
fn test_fmap() {
    assert_eq!(O::pure(3).fmap(|x| x + 15), Outcome::Success(18));
    assert_eq!(O::zero().fmap(|x| x + 15), Outcome::Failure);
    assert_eq!(O::error("bad").fmap(|x| x + 15), Outcome::Error("bad"));
}

#[test]
fn test_bind_propagates() {
    let double = |x: i32| O::pure(x * 2);
    assert_eq!(O::pure(21).bind(double), Outcome::Success(42));
    assert_eq!(O::zero().bind(double), Outcome::Failure);
    assert_eq!(O::error("bad").bind(double), Outcome::Error("bad"));
    let late = O::pure(1).bind(|_| O::error("late"));
    assert_eq!(late, Outcome::Error("late"));
}

#[test]
fn test_ap() {
    let f: Outcome<fn(i32) -> i32, &str> = Outcome::Success(|x| x - 1);
    assert_eq!(f.ap(O::pure(5)), Outcome::Success(4));
    assert_eq!(f.ap(O::zero()), Outcome::Failure);

    let failed: Outcome<fn(i32) -> i32, &str> = Outcome::Failure;
    assert_eq!(failed.ap(O::error("ignored")), Outcome::Failure);
}

#[test]
fn test_plus_only_failure_falls_through() {
    assert_eq!(O::zero().plus(O::pure(2)), Outcome::Success(2));
    assert_eq!(O::pure(1).plus(O::pure(2)), Outcome::Success(1));
    assert_eq!(O::error("first").plus(O::pure(2)), Outcome::Error("first"));
    assert_eq!(O::zero().plus(O::zero()), Outcome::Failure);
}

#[test]
fn test_or_else_is_lazy() {
    let mut called = false;
    let outcome = O::error("stop").or_else(|| {
        called = true;
        O::pure(0)
    });
    assert_eq!(outcome, Outcome::Error("stop"));
    assert!(!called);
}

#[test]
fn test_map_err() {
    let outcome: Outcome<i32, Vec<u8>> = Outcome::Error(vec![89, 22]);
    assert_eq!(outcome.map_err(|e| e.len()), Outcome::Error(2));
    assert_eq!(O::pure(1).map_err(str::len), Outcome::Success(1));
    assert_eq!(O::zero().map_err(str::len), Outcome::Failure);
}

#[test]
fn test_into_result() {
    assert_eq!(O::pure(7).into_result(), Ok(7));
    assert_eq!(O::zero().into_result(), Err(Rejection::NoMatch));
    assert_eq!(O::error("bad").into_result(), Err(Rejection::Fatal("bad")));

    let result: Result<i32, Rejection<&str>> = O::error("bad").into();
    assert_eq!(result.unwrap_err().fatal(), Some("bad"));
}

#[test]
fn test_from_result() {
    assert_eq!(O::from(Ok(1)), Outcome::Success(1));
    assert_eq!(O::from(Err("bad")), Outcome::Error("bad"));
}

#[test]
fn test_rejection_display() {
    let no_match: Rejection<&str> = Rejection::NoMatch;
    assert_eq!(no_match.to_string(), "input did not match");
    assert_eq!(Rejection::Fatal("unmatched {").to_string(), "unmatched {");
}

#[test]
#[should_panic(expected = "on `Failure`")]
fn test_unwrap_failure_panics() {
    let _ = O::zero().unwrap();
}

// === Property tests ===

mod laws {
    use super::*;
    use proptest::prelude::*;

    fn outcome() -> impl Strategy<Value = Outcome<i32, u8>> {
        prop_oneof![
            any::<i32>().prop_map(Outcome::Success),
            Just(Outcome::Failure),
            any::<u8>().prop_map(Outcome::Error),
        ]
    }

    fn step(x: i32) -> Outcome<i32, u8> {
        match x.rem_euclid(3) {
            0 => Outcome::Success(x.wrapping_mul(2)),
            1 => Outcome::Failure,
            _ => Outcome::Error(7),
        }
    }

    proptest! {
        #[test]
        fn fmap_identity(m in outcome()) {
            prop_assert_eq!(m.fmap(|x| x), m);
        }

        #[test]
        fn left_identity(x in any::<i32>()) {
            prop_assert_eq!(Outcome::pure(x).bind(step), step(x));
        }

        #[test]
        fn right_identity(m in outcome()) {
            prop_assert_eq!(m.bind(Outcome::pure), m);
        }

        #[test]
        fn zero_is_left_unit_of_plus(m in outcome()) {
            prop_assert_eq!(Outcome::zero().plus(m), m);
        }

        #[test]
        fn plus_keeps_decided_left(m in outcome(), other in outcome()) {
            prop_assume!(!m.is_failure());
            prop_assert_eq!(m.plus(other), m);
        }
    }
}
