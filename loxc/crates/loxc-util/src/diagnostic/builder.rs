//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API.

use super::{Diagnostic, DiagnosticCode, ErrorSink};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
///
/// let diag = DiagnosticBuilder::error("Unexpected character: @")
///     .line(3)
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .build();
///
/// assert_eq!(diag.to_string(), "[line 3] Error: Unexpected character: @");
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    message: String,
    line: u32,
    context: String,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    ///
    /// The line defaults to 1 until [`DiagnosticBuilder::line`] is called.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: 1,
            context: String::new(),
            code: None,
        }
    }

    /// Set the 1-based source line
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Set the context fragment (e.g. `" at end"`)
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            line: self.line,
            context: self.context,
            message: self.message,
            code: self.code,
        }
    }

    /// Build and emit the diagnostic to the given sink
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let mut handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong")
    ///     .line(2)
    ///     .emit(&mut handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit<S: ErrorSink + ?Sized>(self, sink: &mut S) {
        sink.emit(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Handler;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("test error").build();
        assert_eq!(diag.message, "test error");
        assert_eq!(diag.line, 1);
        assert!(diag.context.is_empty());
        assert_eq!(diag.code, None);
    }

    #[test]
    fn test_builder_fluent() {
        let diag = DiagnosticBuilder::error("Unterminated string.")
            .line(9)
            .context(" at end")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .build();

        assert_eq!(diag.line, 9);
        assert_eq!(diag.context, " at end");
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
    }

    #[test]
    fn test_builder_emit() {
        let mut handler = Handler::new();
        DiagnosticBuilder::error("test error").line(5).emit(&mut handler);

        assert!(handler.has_errors());
        assert_eq!(handler.diagnostics()[0].line, 5);
    }

    #[test]
    fn test_builder_emit_through_trait_object() {
        let mut handler = Handler::new();
        {
            let sink: &mut dyn ErrorSink = &mut handler;
            DiagnosticBuilder::error("type error")
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                .emit(sink);
        }

        assert_eq!(handler.diagnostics()[0].code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
    }
}
