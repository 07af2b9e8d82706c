//! Lexer integration tests.
//!
//! Verifies segmentation, termination and the error path of the state
//! machine, using the synchronous `tokenize` entry point.

use maxo_lexer::{tokenize, Item, ItemKind};
use maxo_options::LexerOptions;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: scan all items from source with default options.
fn scan_all(source: &str) -> Vec<Item> {
    tokenize(source, &LexerOptions::default())
}

/// Helper: scan all items as (kind, value) pairs.
fn scan_pairs(source: &str) -> Vec<(ItemKind, String)> {
    scan_all(source)
        .into_iter()
        .map(|item| (item.kind, item.value))
        .collect()
}

fn pair(kind: ItemKind, value: &str) -> (ItemKind, String) {
    (kind, value.to_string())
}

#[test]
fn test_empty_input() {
    assert_eq!(scan_all(""), vec![Item::new(ItemKind::EndOfInput, 0, "")]);
}

#[test]
fn test_whitespace_only() {
    assert_eq!(
        scan_all("   "),
        vec![
            Item::new(ItemKind::WhiteSpace, 0, "   "),
            Item::new(ItemKind::EndOfInput, 3, ""),
        ]
    );
}

#[test]
fn test_single_word() {
    assert_eq!(
        scan_pairs("maxo"),
        vec![pair(ItemKind::Text, "maxo"), pair(ItemKind::EndOfInput, "")]
    );
}

#[test]
fn test_two_words() {
    assert_eq!(
        scan_all("go rocks"),
        vec![
            Item::new(ItemKind::Text, 0, "go"),
            Item::new(ItemKind::WhiteSpace, 2, " "),
            Item::new(ItemKind::Text, 3, "rocks"),
            Item::new(ItemKind::EndOfInput, 8, ""),
        ]
    );
}

#[test]
fn test_leading_and_trailing_whitespace() {
    assert_eq!(
        scan_pairs("  hi  "),
        vec![
            pair(ItemKind::WhiteSpace, "  "),
            pair(ItemKind::Text, "hi"),
            pair(ItemKind::WhiteSpace, "  "),
            pair(ItemKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn test_multi_space_run_is_one_item() {
    assert_eq!(
        scan_pairs("a  b"),
        vec![
            pair(ItemKind::Text, "a"),
            pair(ItemKind::WhiteSpace, "  "),
            pair(ItemKind::Text, "b"),
            pair(ItemKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn test_mixed_whitespace_kinds_merge() {
    assert_eq!(
        scan_pairs("a \t\r\n b"),
        vec![
            pair(ItemKind::Text, "a"),
            pair(ItemKind::WhiteSpace, " \t\r\n "),
            pair(ItemKind::Text, "b"),
            pair(ItemKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn test_punctuation_is_text() {
    assert_eq!(
        scan_pairs("x=1; y"),
        vec![
            pair(ItemKind::Text, "x=1;"),
            pair(ItemKind::WhiteSpace, " "),
            pair(ItemKind::Text, "y"),
            pair(ItemKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn test_multibyte_at_boundaries() {
    assert_eq!(
        scan_all("héllo\u{3000}wörld🦀"),
        vec![
            Item::new(ItemKind::Text, 0, "héllo"),
            Item::new(ItemKind::WhiteSpace, 6, "\u{3000}"),
            Item::new(ItemKind::Text, 9, "wörld🦀"),
            Item::new(ItemKind::EndOfInput, 19, ""),
        ]
    );
}

#[test]
fn test_multibyte_whitespace_followed_by_multibyte_text() {
    assert_eq!(
        scan_pairs("\u{00A0}\u{2003}é"),
        vec![
            pair(ItemKind::WhiteSpace, "\u{00A0}\u{2003}"),
            pair(ItemKind::Text, "é"),
            pair(ItemKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn test_end_of_input_position_is_input_length() {
    let source = "one two three";
    let items = scan_all(source);
    let last = items.last().unwrap();
    assert_eq!(last.kind, ItemKind::EndOfInput);
    assert_eq!(last.position, source.len());
    assert!(last.value.is_empty());
}

// --- Error path ---

#[test]
fn test_nul_is_text() {
    assert_eq!(
        scan_all("a\0b c"),
        vec![
            Item::new(ItemKind::Text, 0, "a\0b"),
            Item::new(ItemKind::WhiteSpace, 3, " "),
            Item::new(ItemKind::Text, 4, "c"),
            Item::new(ItemKind::EndOfInput, 5, ""),
        ]
    );
}

#[test]
fn test_trailing_nul_does_not_end_input() {
    assert_eq!(
        scan_pairs("ab \0"),
        vec![
            pair(ItemKind::Text, "ab"),
            pair(ItemKind::WhiteSpace, " "),
            pair(ItemKind::Text, "\0"),
            pair(ItemKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn test_overlong_first_segment() {
    let options = LexerOptions::default().with_max_segment_length(2);
    assert_eq!(
        tokenize("abc", &options),
        vec![Item::new(
            ItemKind::Error,
            0,
            "Segment starting at offset 0 exceeds the maximum length of 2 bytes."
        )]
    );
}

#[test]
fn test_segment_too_long() {
    let options = LexerOptions::default().with_max_segment_length(3);
    let items = tokenize("abc defg hi", &options);
    assert_eq!(
        items,
        vec![
            Item::new(ItemKind::Text, 0, "abc"),
            Item::new(ItemKind::WhiteSpace, 3, " "),
            Item::new(
                ItemKind::Error,
                4,
                "Segment starting at offset 4 exceeds the maximum length of 3 bytes."
            ),
        ]
    );
}

#[test]
fn test_whitespace_segment_too_long() {
    let options = LexerOptions::default().with_max_segment_length(2);
    let items = tokenize("a    b", &options);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].kind, ItemKind::Error);
    assert_eq!(items[1].position, 1);
}

#[test]
fn test_segment_at_limit_is_fine() {
    let options = LexerOptions::default().with_max_segment_length(5);
    let items = tokenize("hello world", &options);
    assert_eq!(items.last().map(|i| i.kind), Some(ItemKind::EndOfInput));
}

#[test]
fn test_item_display() {
    let items = scan_all("hi there");
    let lines: Vec<String> = items.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Text@0 \"hi\"",
            "WhiteSpace@2 \" \"",
            "Text@3 \"there\"",
            "EndOfInput@8 \"\"",
        ]
    );
}

// --- Properties ---

fn printable_input() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            "[a-z0-9.,;]{1,6}",
            "[ \t\n]{1,3}",
            "[é🦀\u{3000}\u{00A0}]{1,2}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_segments_cover_input(input in printable_input()) {
        let items = scan_all(&input);
        let rebuilt: String = items
            .iter()
            .filter(|item| !item.is_terminal())
            .map(|item| item.value.as_str())
            .collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn prop_kinds_alternate(input in printable_input()) {
        let items = scan_all(&input);
        let body: Vec<&Item> = items.iter().filter(|item| !item.is_terminal()).collect();
        for window in body.windows(2) {
            prop_assert_ne!(window[0].kind, window[1].kind);
        }
        for item in &body {
            prop_assert!(!item.value.is_empty());
        }
    }

    #[test]
    fn prop_exactly_one_terminal_item_last(input in printable_input()) {
        let items = scan_all(&input);
        let terminals = items.iter().filter(|item| item.is_terminal()).count();
        prop_assert_eq!(terminals, 1);
        prop_assert_eq!(items.last().map(|item| item.kind), Some(ItemKind::EndOfInput));
    }

    #[test]
    fn prop_positions_are_contiguous(input in printable_input()) {
        let items = scan_all(&input);
        let mut expected = 0;
        for item in &items {
            prop_assert_eq!(item.position, expected);
            expected = item.end();
        }
        prop_assert_eq!(expected, input.len());
    }

    #[test]
    fn prop_error_is_terminal(input in printable_input(), max in 1usize..6) {
        let options = LexerOptions::default().with_max_segment_length(max);
        let items = tokenize(&input, &options);
        let last = items.last().unwrap();
        prop_assert!(last.is_terminal());
        prop_assert_eq!(items.iter().filter(|item| item.is_terminal()).count(), 1);
        if last.kind == ItemKind::EndOfInput {
            prop_assert!(items.iter().all(|item| item.value.len() <= max));
        }
    }
}
