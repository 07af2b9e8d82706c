//! The scanner engine.
//!
//! The scanner owns the cursor over the input and is the only place items
//! are built. State handlers in `state.rs` drive it through the primitives
//! below; they never touch the cursor fields directly.

use crate::item::{Item, ItemKind};
use maxo_diagnostics::DiagnosticMessage;
use maxo_options::LexerOptions;
use tokio::sync::mpsc;
use tracing::trace;

/// The consumer stopped listening before the scan finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("item stream closed by the consumer")]
pub struct SinkClosed;

/// Where emitted items go.
pub trait ItemSink {
    /// Deliver one item, blocking while the sink is full.
    fn accept(&mut self, item: Item) -> Result<(), SinkClosed>;
}

impl ItemSink for Vec<Item> {
    fn accept(&mut self, item: Item) -> Result<(), SinkClosed> {
        self.push(item);
        Ok(())
    }
}

/// Must only be used off the async executor (e.g. inside `spawn_blocking`).
impl ItemSink for mpsc::Sender<Item> {
    fn accept(&mut self, item: Item) -> Result<(), SinkClosed> {
        self.blocking_send(item).map_err(|_| SinkClosed)
    }
}

/// Cursor state over an immutable input, plus the sink items are sent to.
///
/// Invariant: `start <= position <= input.len()`, and both sit on char
/// boundaries.
pub struct Scanner<'a, S> {
    /// The source text being scanned.
    input: &'a str,
    /// Start of the pending (not yet emitted) segment.
    start: usize,
    /// Current scan offset.
    position: usize,
    /// Byte width of the last code point consumed by `advance`; zero once
    /// consumed by `step_back` or after reaching end of input.
    width: usize,
    max_segment_length: Option<usize>,
    sink: S,
}

impl<'a, S: ItemSink> Scanner<'a, S> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str, options: &LexerOptions, sink: S) -> Self {
        Self {
            input,
            start: 0,
            position: 0,
            width: 0,
            max_segment_length: options.max_segment_length,
            sink,
        }
    }

    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Start of the pending segment.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current scan offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text consumed since the last emit or ignore.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.position]
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.position > self.start
    }

    /// Consume the next code point. `None` means end of input.
    pub fn advance(&mut self) -> Option<char> {
        match self.input[self.position..].chars().next() {
            Some(ch) => {
                self.width = ch.len_utf8();
                self.position += self.width;
                Some(ch)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Un-consume the code point returned by the last `advance`.
    ///
    /// Only one step back is allowed per advance.
    pub fn step_back(&mut self) {
        debug_assert!(
            self.width > 0,
            "step_back called without a preceding advance"
        );
        self.position -= self.width;
        self.width = 0;
    }

    /// Drop the pending segment without emitting it.
    pub fn ignore(&mut self) {
        self.start = self.position;
    }

    /// Emit the pending segment as an item of the given kind.
    pub fn emit(&mut self, kind: ItemKind) -> Result<(), SinkClosed> {
        let item = Item::new(kind, self.start, self.pending());
        self.ignore();
        self.send(item)
    }

    /// Emit an error item. The pending segment is discarded.
    pub fn emit_error(
        &mut self,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Result<(), SinkClosed> {
        let item = Item::new(ItemKind::Error, self.start, message.format(args));
        self.ignore();
        self.send(item)
    }

    /// The configured limit, if the pending segment has grown past it.
    pub fn segment_overflow(&self) -> Option<usize> {
        self.max_segment_length
            .filter(|&max| self.position - self.start > max)
    }

    /// Tear down the scanner and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn send(&mut self, item: Item) -> Result<(), SinkClosed> {
        trace!(kind = ?item.kind, position = item.position, len = item.len(), "emit");
        self.sink.accept(item)
    }
}
