//! Word reversal helpers.

use maxo_lexer::is_white_space;

/// Reverse the code points of `s`.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverse every word of `input` in place, leaving whitespace untouched.
///
/// Works directly on the text without the lexer; the streaming
/// [`crate::Parser`] must agree with it on every input.
pub fn reverse_words(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut word = String::new();
    for ch in input.chars() {
        if is_white_space(ch) {
            if !word.is_empty() {
                result.push_str(&reverse(&word));
                word.clear();
            }
            result.push(ch);
        } else {
            word.push(ch);
        }
    }
    result.push_str(&reverse(&word));
    result
}
