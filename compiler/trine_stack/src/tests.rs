use super::*;

/// A linked nesting, the shape a `{{{...}}}` document produces.
enum Nest {
    Leaf,
    Inner(Box<Nest>),
}

fn build(depth: usize) -> Nest {
    let mut nest = Nest::Leaf;
    for _ in 0..depth {
        nest = Nest::Inner(Box::new(nest));
    }
    nest
}

fn depth_of(nest: &Nest) -> usize {
    ensure_sufficient_stack(|| match nest {
        Nest::Leaf => 0,
        Nest::Inner(inner) => depth_of(inner) + 1,
    })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(depth_of(&build(10)), 10);
}

#[test]
fn test_deep_nesting() {
    let nest = build(200_000);
    assert_eq!(depth_of(&nest), 200_000);
    // Drop iteratively; the derived drop would recurse 200k frames.
    let mut cursor = nest;
    while let Nest::Inner(inner) = cursor {
        cursor = *inner;
    }
}

#[test]
fn test_passes_result_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("stop"));
    assert_eq!(result, Err("stop"));
}
