//! Items produced by the lexer.

use std::fmt;

/// How a segment of input was classified.
///
/// Only kinds the state machine can actually produce live here. New kinds
/// (digits, quotes, comments, operators) arrive together with their handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A run of whitespace, line terminators included.
    WhiteSpace,
    /// A run of anything else.
    Text,
    /// End of input. Always carries an empty value.
    EndOfInput,
    /// The scan failed; the value is the message.
    Error,
}

impl ItemKind {
    /// Whether no item can follow one of this kind.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ItemKind::EndOfInput | ItemKind::Error)
    }
}

/// A classified segment of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Byte offset in the input where the segment starts.
    pub position: usize,
    /// The classification.
    pub kind: ItemKind,
    /// The exact text of the segment, or the message of an error item.
    pub value: String,
}

impl Item {
    pub fn new(kind: ItemKind, position: usize, value: impl Into<String>) -> Self {
        Self {
            position,
            kind,
            value: value.into(),
        }
    }

    /// Byte offset just past the segment.
    ///
    /// Error items carry a message rather than input text, so their end is
    /// their position.
    pub fn end(&self) -> usize {
        match self.kind {
            ItemKind::Error => self.position,
            _ => self.position + self.value.len(),
        }
    }

    /// The length of the value in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} {:?}", self.kind, self.position, self.value)
    }
}
