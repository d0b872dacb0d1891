//! Error sinks: where front-end phases send their diagnostics.

use std::io::Write;

use super::Diagnostic;

/// Collaborator that receives diagnostics from a front-end phase.
///
/// Reporting never aborts the caller. A sink only remembers that something
/// went wrong; the host reads [`ErrorSink::had_error`] afterwards to decide
/// whether the run failed.
pub trait ErrorSink {
    /// Record one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);

    /// Whether any diagnostic has been recorded so far. Sticky.
    fn had_error(&self) -> bool;

    /// Record a plain error on `line`.
    ///
    /// `context` is spliced between `Error` and the colon when rendered; the
    /// scanner always passes an empty string.
    fn report(&mut self, line: u32, context: &str, message: &str) {
        self.emit(Diagnostic::error(message, line).with_context(context));
    }
}

/// Sink that renders each diagnostic to a stream as soon as it arrives.
///
/// The CLI wraps stderr in one of these, one per scan.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Emitter, ErrorSink};
///
/// let mut emitter = Emitter::new(Vec::new());
/// emitter.report(1, "", "Unexpected character: @");
///
/// assert!(emitter.had_error());
/// assert_eq!(
///     String::from_utf8(emitter.into_inner()).unwrap(),
///     "[line 1] Error: Unexpected character: @\n"
/// );
/// ```
#[derive(Debug)]
pub struct Emitter<W: Write> {
    out: W,
    error_count: usize,
}

impl<W: Write> Emitter<W> {
    /// Create an emitter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out, error_count: 0 }
    }

    /// Number of diagnostics emitted so far
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorSink for Emitter<W> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.error_count += 1;
        if let Err(err) = writeln!(self.out, "{}", diagnostic) {
            tracing::warn!(%err, line = diagnostic.line, "failed to write diagnostic");
        }
    }

    fn had_error(&self) -> bool {
        self.error_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emitter_writes_each_diagnostic_on_its_own_line() {
        let mut emitter = Emitter::new(Vec::new());
        emitter.report(1, "", "Unexpected character: @");
        emitter.report(4, "", "Unterminated string.");

        assert_eq!(emitter.error_count(), 2);
        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(
            text,
            "[line 1] Error: Unexpected character: @\n[line 4] Error: Unterminated string.\n"
        );
    }

    #[test]
    fn test_emitter_starts_clean() {
        let emitter = Emitter::new(Vec::new());
        assert!(!emitter.had_error());
        assert_eq!(emitter.error_count(), 0);
    }

    #[test]
    fn test_emitter_flag_survives_write_failure() {
        let mut emitter = Emitter::new(BrokenPipe);
        emitter.report(2, "", "Unexpected character: #");
        assert!(emitter.had_error());
    }
}
