use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_split_first_walks_the_buffer() {
    let stream = TokenStream::from("abc");
    let Some((first, rest)) = stream.split_first() else {
        panic!("expected a token");
    };
    assert_eq!(*first, 'a');
    assert_eq!(rest.as_slice(), &['b', 'c']);
    assert_eq!(rest.offset(), 1);
    assert_eq!(rest.len(), 2);
    // The original is untouched.
    assert_eq!(stream.len(), 3);
}

#[test]
fn test_empty_stream() {
    let stream: TokenStream<u8> = TokenStream::default();
    assert!(stream.is_empty());
    assert!(stream.first().is_none());
    assert!(stream.split_first().is_none());
}

#[test]
fn test_suffix_relation() {
    let stream = TokenStream::from(vec![1, 2, 3]);
    let rest = stream
        .split_first()
        .map(|(_, rest)| rest)
        .unwrap_or_default();
    assert!(rest.is_suffix_of(&stream));
    assert!(stream.is_suffix_of(&stream));
    assert!(!stream.is_suffix_of(&rest));

    // Equal contents in a different buffer are not a suffix.
    let copy = TokenStream::from(vec![2, 3]);
    assert_eq!(copy, rest);
    assert!(!copy.is_suffix_of(&stream));
}

#[test]
fn test_equality_ignores_offset() {
    let long = TokenStream::from("xyz");
    let short = long.split_first().map(|(_, rest)| rest).unwrap_or_default();
    assert_eq!(short, TokenStream::from("yz"));
    assert_eq!(format!("{short:?}"), "['y', 'z']");
}

#[test]
fn test_collect() {
    let stream: TokenStream<u32> = (1..=4).collect();
    assert_eq!(stream.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(stream.first(), Some(&1));
}
