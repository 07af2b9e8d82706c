//! The item stream: a lexer running as a producer task.

use crate::item::Item;
use crate::scanner::Scanner;
use crate::state::run_machine;
use maxo_options::LexerOptions;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug_span, warn};

/// The producer task did not run to completion.
#[derive(Debug, thiserror::Error)]
pub enum LexerError {
    #[error("lexer task panicked")]
    Panicked,
    #[error("lexer task was cancelled")]
    Cancelled,
}

impl From<JoinError> for LexerError {
    fn from(err: JoinError) -> Self {
        if err.is_panic() {
            LexerError::Panicked
        } else {
            LexerError::Cancelled
        }
    }
}

/// Handle to a running scan.
///
/// Items arrive in input order and the stream ends after the terminal item.
/// Dropping the handle closes the stream; the producer notices on its next
/// delivery and stops.
pub struct Lexer {
    items: mpsc::Receiver<Item>,
    producer: Option<JoinHandle<()>>,
}

impl Lexer {
    /// Start scanning `input` on the tokio blocking pool.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(input: impl Into<String>, options: &LexerOptions) -> Self {
        let input = input.into();
        let options = options.clone();
        let (tx, items) = mpsc::channel(options.effective_buffer_capacity());

        let producer = tokio::task::spawn_blocking(move || {
            let span = debug_span!("scan", len = input.len());
            let _enter = span.enter();

            let mut scanner = Scanner::new(&input, &options, tx);
            if run_machine(&mut scanner).is_err() {
                warn!(position = scanner.position(), "item stream closed; scan abandoned");
            }
        });

        Self {
            items,
            producer: Some(producer),
        }
    }

    /// Receive the next item. `None` once the stream has ended.
    pub async fn next_item(&mut self) -> Option<Item> {
        self.items.recv().await
    }

    /// Blocking variant of [`Lexer::next_item`] for synchronous callers.
    ///
    /// # Panics
    ///
    /// Panics if called from within an async execution context.
    pub fn blocking_next_item(&mut self) -> Option<Item> {
        self.items.blocking_recv()
    }

    /// Stop receiving and wait for the producer to exit.
    ///
    /// Items still buffered are discarded.
    pub async fn finish(mut self) -> Result<(), LexerError> {
        self.items.close();
        match self.producer.take() {
            Some(producer) => producer.await.map_err(LexerError::from),
            None => Ok(()),
        }
    }
}

impl Drop for Lexer {
    fn drop(&mut self) {
        self.items.close();
        if let Some(producer) = self.producer.take() {
            producer.abort();
        }
    }
}
