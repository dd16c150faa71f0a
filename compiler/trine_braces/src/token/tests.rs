use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_tokenize_tracks_lines() {
    let tokens = tokenize("a{\nb");
    let located: Vec<(char, u32, u32)> = tokens
        .as_slice()
        .iter()
        .map(|t| (t.ch, t.position.line, t.position.column))
        .collect();
    assert_eq!(
        located,
        vec![('a', 1, 1), ('{', 1, 2), ('\n', 1, 3), ('b', 2, 1)]
    );
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_same_char_ignores_position() {
    let here = Located::new('{', Position::START);
    let there = Located::new('{', Position::new(9, 4));
    assert!(here.same_char(&there));
    assert!(!here.same_char(&Located::new('}', Position::START)));
    assert_ne!(here, there);
}

#[test]
fn test_display() {
    let close = Located::new('}', Position::new(2, 5));
    assert_eq!(close.to_string(), "'}' at 2:5");
}
