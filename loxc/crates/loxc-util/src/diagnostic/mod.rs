//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! front-end diagnostics.
//!
//! # Examples
//!
//! ## Collecting diagnostics
//!
//! ```
//! use loxc_util::diagnostic::{ErrorSink, Handler};
//!
//! let mut handler = Handler::new();
//! handler.report(3, "", "Unexpected character: @");
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 3] Error: Unexpected character: @"
//! );
//! ```
//!
//! ## Using the fluent builder API
//!
//! ```
//! use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("Unterminated string.")
//!     .line(7)
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod sink;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use sink::{Emitter, ErrorSink};

// Re-export the lexer diagnostic codes as constants for convenience
pub use codes::{E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};

use std::fmt;

/// A line-tagged diagnostic message
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::Diagnostic;
///
/// let diag = Diagnostic::error("Unterminated string.", 2);
/// assert_eq!(diag.line, 2);
/// assert_eq!(diag.to_string(), "[line 2] Error: Unterminated string.");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// 1-based source line active when the problem was detected
    pub line: u32,
    /// Location fragment spliced between `Error` and the colon, usually empty
    pub context: String,
    /// Main diagnostic message
    pub message: String,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new error diagnostic on the given line
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self {
            line,
            context: String::new(),
            message: message.into(),
            code: None,
        }
    }

    /// Set the context fragment
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line, self.context, self.message)
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` records every diagnostic it receives and answers queries
/// about them. It can be configured to panic on the first error, which is
/// handy in tests that expect clean input.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, ErrorSink, Handler};
///
/// let mut handler = Handler::new();
/// handler.emit(Diagnostic::error("Unexpected character: #", 1));
///
/// if handler.has_errors() {
///     eprintln!("Scan failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: Vec::new(),
            panic_on_error: true,
        }
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in report order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take ownership of the collected diagnostics, leaving the handler empty
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl ErrorSink for Handler {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if self.panic_on_error {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.push(diagnostic);
    }

    fn had_error(&self) -> bool {
        self.has_errors()
    }
}
