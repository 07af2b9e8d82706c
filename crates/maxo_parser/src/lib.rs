//! maxo_parser: Consumers of the maxo item stream.
//!
//! The reference consumer drains a running [`maxo_lexer::Lexer`] and
//! reassembles the input with every word reversed, keeping whitespace as it
//! was. [`transform`] is the one-call entry point.

mod parser;
mod utilities;

pub use parser::{transform, transform_async, transform_with, Parser, TransformError};
pub use utilities::{reverse, reverse_words};
