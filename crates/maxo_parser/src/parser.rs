//! The reference consumer.
//!
//! Drains the item stream: text items are reversed, whitespace items are
//! copied through, and the first terminal item decides the outcome.

use crate::utilities::reverse;
use maxo_diagnostics::{messages, Diagnostic};
use maxo_lexer::{ItemKind, Lexer, LexerError};
use maxo_options::LexerOptions;
use tracing::debug;

/// Why a transform produced no output.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The lexer emitted an error item.
    #[error("error processing the following {message:?}")]
    Scan { position: usize, message: String },
    /// The stream ended without a terminal item.
    #[error("item stream closed before the end of input was reached")]
    Truncated,
    #[error(transparent)]
    Producer(#[from] LexerError),
    #[error("failed to start the scan runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl TransformError {
    /// A located diagnostic for failures that come from the input itself.
    pub fn to_diagnostic(&self, file: &str) -> Option<Diagnostic> {
        match self {
            TransformError::Scan { position, message } => {
                let quoted = format!("{:?}", message);
                Some(Diagnostic::with_location(
                    file.to_string(),
                    *position,
                    &messages::ERROR_PROCESSING_THE_FOLLOWING_0,
                    &[quoted.as_str()],
                ))
            }
            TransformError::Truncated => Some(Diagnostic::new(
                &messages::ITEM_STREAM_CLOSED_BEFORE_END_OF_INPUT,
                &[],
            )),
            TransformError::Producer(_) | TransformError::Runtime(_) => None,
        }
    }
}

/// Rebuilds the input with each word reversed.
pub struct Parser {
    lexer: Lexer,
    result: String,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            result: String::new(),
        }
    }

    /// Consume the stream until a terminal item arrives.
    pub async fn parse(mut self) -> Result<String, TransformError> {
        loop {
            let Some(item) = self.lexer.next_item().await else {
                // Surface a producer panic in preference to a bare truncation.
                self.lexer.finish().await?;
                return Err(TransformError::Truncated);
            };

            match item.kind {
                ItemKind::Text => self.result.push_str(&reverse(&item.value)),
                ItemKind::WhiteSpace => self.result.push_str(&item.value),
                ItemKind::EndOfInput => {
                    self.lexer.finish().await?;
                    debug!(len = self.result.len(), "transform complete");
                    return Ok(self.result);
                }
                ItemKind::Error => {
                    self.lexer.finish().await?;
                    debug!(position = item.position, message = %item.value, "transform failed");
                    return Err(TransformError::Scan {
                        position: item.position,
                        message: item.value,
                    });
                }
            }
        }
    }
}

/// Transform `input` inside an existing tokio runtime.
pub async fn transform_async(
    input: &str,
    options: &LexerOptions,
) -> Result<String, TransformError> {
    Parser::new(Lexer::spawn(input, options)).parse().await
}

/// Transform `input` on a private current-thread runtime.
///
/// # Panics
///
/// Panics if called from within an async execution context; use
/// [`transform_async`] there.
pub fn transform_with(input: &str, options: &LexerOptions) -> Result<String, TransformError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(transform_async(input, options))
}

/// Reverse every word of `input`, keeping whitespace verbatim.
pub fn transform(input: &str) -> Result<String, TransformError> {
    transform_with(input, &LexerOptions::default())
}
