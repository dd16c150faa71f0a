use super::*;
use pretty_assertions::assert_eq;

type Chars = Itemizer<(), char, &'static str>;

fn chars() -> Chars {
    Itemizer::basic()
}

#[test]
fn test_run_reports_state_rest_and_value() {
    let c = Itemizer::<u8, char, &str>::basic();
    let parsed = run(&c.string("abc".chars()), "abcdef", 4).unwrap();
    assert_eq!(parsed.state, 4);
    assert_eq!(parsed.rest, TokenStream::from("def"));
    assert_eq!(parsed.result, vec!['a', 'b', 'c']);
}

#[test]
fn test_run_on_empty_input() {
    assert_eq!(run(&chars().item(), "", ()), Outcome::Failure);
    let all = chars().item().many0();
    assert_eq!(run(&all, "", ()).unwrap().result, Vec::<char>::new());
}

#[test]
fn test_run_accepts_slices_and_vectors() {
    let ints = Itemizer::<(), u16, &str>::basic();
    let p = ints.literal(3).many1();
    let from_vec = run(&p, vec![3, 3, 4], ()).unwrap();
    let from_slice = run(&p, &[3u16, 3, 4][..], ()).unwrap();
    assert_eq!(from_vec.result, from_slice.result);
    assert_eq!(from_vec.rest.as_slice(), &[4]);
}

#[test]
fn test_many1_without_a_match() {
    let p = chars().literal('a').many1();
    assert_eq!(run(&p, "bbb", ()), Outcome::Failure);
}

#[test]
fn test_into_result() {
    let c = chars();
    let letter = c.satisfy(char::is_ascii_alphabetic);
    assert_eq!(
        run(&letter, "x", ()).into_result().map(|p| p.result),
        Ok('x')
    );
    assert_eq!(
        run(&letter, "1", ()).into_result().map(|p| p.result),
        Err(Rejection::NoMatch)
    );
    let strict = letter.commit("letter expected");
    assert_eq!(
        run(&strict, "1", ()).into_result().map(|p| p.result),
        Err(Rejection::Fatal("letter expected"))
    );
}

// Balanced parentheses: `nest := '(' nest* ')'`, producing the depth.
fn nesting() -> Parser<(), char, &'static str, usize> {
    let c = chars();
    recursive(move |nest| {
        app!(
            |_, inner: Vec<usize>, _| 1 + inner.into_iter().max().unwrap_or(0),
            c.literal('('),
            nest.many0(),
            c.literal(')').commit("unclosed (")
        )
    })
}

#[test]
fn test_recursive() {
    let p = nesting();
    assert_eq!(run(&p, "()", ()).unwrap().result, 1);
    assert_eq!(run(&p, "(()(()))x", ()).unwrap().result, 3);
    assert_eq!(run(&p, "x", ()), Outcome::Failure);
    assert_eq!(run(&p, "(()", ()), Outcome::Error("unclosed ("));
}

#[test]
fn test_recursive_deep_nesting() {
    let depth = 10_000;
    let input: String = "(".repeat(depth) + &")".repeat(depth);
    assert_eq!(run(&nesting(), input.as_str(), ()).unwrap().result, depth);
}

fn list() -> Parser<(), char, &'static str, Vec<char>> {
    let c = chars();
    c.literal('[')
        .seq2r(alt([c.satisfy(char::is_ascii_digit), lazy(list).fmap(|_| '*')]).many0())
        .seq2l(c.literal(']'))
}

#[test]
fn test_lazy() {
    let parsed = run(&list(), "[1[2[]]3]", ()).unwrap();
    assert_eq!(parsed.result, vec!['1', '*', '3']);
    assert!(parsed.rest.is_empty());
}

#[test]
fn test_grammar_is_shared_across_threads() {
    let grammar = nesting();
    let inputs = ["()", "(())", "((()))", "(()"];
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let grammar = &grammar;
                scope.spawn(move || run(grammar, *input, ()).fmap(|p| p.result))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert_eq!(
        results,
        vec![
            Outcome::Success(1),
            Outcome::Success(2),
            Outcome::Success(3),
            Outcome::Error("unclosed ("),
        ]
    );
}

#[test]
fn test_failure_does_not_leak_consumption() {
    let c = chars();
    let ab = c.string("ab".chars());
    let p = ab.plus(c.string("ac".chars()));
    let parsed = run(&p, "acd", ()).unwrap();
    assert_eq!(parsed.result, vec!['a', 'c']);
    assert_eq!(parsed.rest, TokenStream::from("d"));
}
