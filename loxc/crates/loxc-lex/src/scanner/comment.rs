//! Comment skipping.
//!
//! Lox only has `//` line comments.

use crate::Scanner;

impl Scanner<'_, '_> {
    /// Skips the rest of a line comment. Both slashes are already consumed.
    ///
    /// Stops before the newline so the dispatcher counts it like any other.
    pub(crate) fn skip_line_comment(&mut self) {
        while self.cursor.peek() != b'\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }
}
