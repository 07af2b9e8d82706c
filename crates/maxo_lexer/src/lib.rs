//! maxo_lexer: Streaming lexer for maxo source text.
//!
//! A state machine walks the input one code point at a time and classifies
//! runs of characters into [`Item`]s. Items are streamed to the consumer as
//! soon as a boundary is found:
//!
//! ```text
//! input -> Scanner (driven by LexState handlers) -> item stream -> consumer
//! ```
//!
//! [`Lexer::spawn`] runs the machine on the tokio blocking pool and hands
//! back the receiving end. [`tokenize`] runs it to completion synchronously.

mod char_codes;
mod item;
mod scanner;
mod state;
mod stream;

pub use char_codes::is_white_space;
pub use item::{Item, ItemKind};
pub use scanner::{ItemSink, Scanner, SinkClosed};
pub use state::{run_machine, tokenize, LexState};
pub use stream::{Lexer, LexerError};
