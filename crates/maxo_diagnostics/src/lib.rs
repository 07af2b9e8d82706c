//! maxo_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Scan errors are phrased from the coded message templates in [`messages`].
//! The lexer only ever ships the resolved message text downstream; tools
//! that know where the text came from wrap it in a [`Diagnostic`] for display.

use std::fmt;

/// A diagnostic message template with a code.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticMessage {
    /// The diagnostic code (rendered as `MX{code}`).
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

impl DiagnosticMessage {
    /// Resolve this template against its arguments.
    pub fn format(&self, args: &[&str]) -> String {
        format_message(self.message, args)
    }
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// Byte offset into the source where this diagnostic occurred, if any.
    pub position: Option<usize>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            position: None,
            message_text: message.format(args),
            code: message.code,
        }
    }

    /// Create a new diagnostic with file and position info.
    pub fn with_location(
        file: String,
        position: usize,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file),
            position: Some(position),
            message_text: message.format(args),
            code: message.code,
        }
    }

    /// The `MX####` code string.
    pub fn code_string(&self) -> String {
        format!("MX{}", self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(position) = self.position {
                write!(f, "({})", position)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "error MX{}: {}", self.code, self.message_text)
    }
}

impl std::error::Error for Diagnostic {}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_string()))
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const SEGMENT_AT_OFFSET_0_EXCEEDS_MAXIMUM_LENGTH_OF_1_BYTES: DiagnosticMessage =
        diag!(1002, "Segment starting at offset {0} exceeds the maximum length of {1} bytes.");

    // ========================================================================
    // Consumer errors (1100-1199)
    // ========================================================================
    pub const ERROR_PROCESSING_THE_FOLLOWING_0: DiagnosticMessage =
        diag!(1101, "error processing the following {0}");
    pub const ITEM_STREAM_CLOSED_BEFORE_END_OF_INPUT: DiagnosticMessage =
        diag!(1102, "Item stream closed before the end of input was reached.");
}
