//! The lexer state machine.
//!
//! Each state handler consumes code points until the whitespace predicate
//! flips, emits what it accumulated, and names the state to run next.
//! `None` halts the machine; by then exactly one terminal item (end of input
//! or error) has been emitted.

use crate::char_codes::is_white_space;
use crate::item::{Item, ItemKind};
use crate::scanner::{ItemSink, Scanner, SinkClosed};
use maxo_diagnostics::{messages, DiagnosticMessage};
use maxo_options::LexerOptions;
use tracing::{debug, trace};

/// What a handler returns: the next state, or `None` to halt.
pub type Transition = Result<Option<LexState>, SinkClosed>;

/// The modes the lexer can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// Accumulating non-whitespace.
    Text,
    /// Accumulating whitespace.
    WhiteSpace,
}

impl LexState {
    pub const INITIAL: LexState = LexState::Text;

    /// Run this state's handler once.
    pub fn step<S: ItemSink>(self, scanner: &mut Scanner<'_, S>) -> Transition {
        match self {
            LexState::Text => lex_text(scanner),
            LexState::WhiteSpace => lex_white_space(scanner),
        }
    }

    /// The kind of item this state accumulates.
    fn item_kind(self) -> ItemKind {
        match self {
            LexState::Text => ItemKind::Text,
            LexState::WhiteSpace => ItemKind::WhiteSpace,
        }
    }
}

/// Drive the scanner from the initial state until a handler halts.
///
/// Returns `Err(SinkClosed)` if the consumer went away first; nothing more
/// is emitted in that case.
pub fn run_machine<S: ItemSink>(scanner: &mut Scanner<'_, S>) -> Result<(), SinkClosed> {
    debug!(len = scanner.input().len(), "lexer start");
    let mut state = Some(LexState::INITIAL);
    while let Some(current) = state {
        trace!(state = ?current, position = scanner.position(), "enter state");
        state = current.step(scanner)?;
    }
    debug!(position = scanner.position(), "lexer halt");
    Ok(())
}

/// Scan `input` to completion and collect every item, terminal included.
pub fn tokenize(input: &str, options: &LexerOptions) -> Vec<Item> {
    let mut scanner = Scanner::new(input, options, Vec::new());
    // A Vec never refuses an item.
    let _ = run_machine(&mut scanner);
    scanner.into_sink()
}

/// Scans what is expected to be text.
fn lex_text<S: ItemSink>(s: &mut Scanner<'_, S>) -> Transition {
    lex_run(s, LexState::Text, |ch| !is_white_space(ch), LexState::WhiteSpace)
}

/// Scans what is expected to be whitespace.
fn lex_white_space<S: ItemSink>(s: &mut Scanner<'_, S>) -> Transition {
    lex_run(s, LexState::WhiteSpace, is_white_space, LexState::Text)
}

/// Consume code points while `belongs` holds, then hand over to `next`.
fn lex_run<S: ItemSink>(
    s: &mut Scanner<'_, S>,
    state: LexState,
    belongs: impl Fn(char) -> bool,
    next: LexState,
) -> Transition {
    loop {
        match s.advance() {
            None => return lex_end_of_input(s, state.item_kind()),
            Some(ch) if belongs(ch) => {
                if let Some(max) = s.segment_overflow() {
                    let start = s.start().to_string();
                    let max = max.to_string();
                    return errorf(
                        s,
                        &messages::SEGMENT_AT_OFFSET_0_EXCEEDS_MAXIMUM_LENGTH_OF_1_BYTES,
                        &[start.as_str(), max.as_str()],
                    );
                }
            }
            Some(_) => {
                s.step_back();
                if s.has_pending() {
                    s.emit(state.item_kind())?;
                }
                return Ok(Some(next));
            }
        }
    }
}

/// Flush whatever is pending as `kind`, emit end of input and halt.
fn lex_end_of_input<S: ItemSink>(s: &mut Scanner<'_, S>, kind: ItemKind) -> Transition {
    if s.has_pending() {
        s.emit(kind)?;
    }
    s.emit(ItemKind::EndOfInput)?;
    Ok(None)
}

/// Emit an error item and halt.
fn errorf<S: ItemSink>(
    s: &mut Scanner<'_, S>,
    message: &DiagnosticMessage,
    args: &[&str],
) -> Transition {
    s.emit_error(message, args)?;
    Ok(None)
}
