//! loxc-lex - Lexical Scanner for the Lox Programming Language
//!
//! This crate turns Lox source text into a flat sequence of tokens that a
//! parser or interpreter can consume.
//!
//! # Overview
//!
//! Scanning is a single left-to-right pass with at most two bytes of
//! lookahead. Every token records its kind, the exact source text it came
//! from, an optional literal value and the line it starts on. The sequence
//! always ends with exactly one `EOF` token.
//!
//! Lexical errors never abort a scan. They are reported to an
//! [`ErrorSink`](loxc_util::ErrorSink) and the scanner resumes on the next
//! byte, so one pass finds every problem in a file.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, Scanner, TokenKind};
//! use loxc_util::Handler;
//!
//! let source = "var x = 42;";
//! let mut handler = Handler::new();
//!
//! // Scan everything at once
//! let tokens = scan(source, &mut handler);
//! assert_eq!(tokens.len(), 6);
//!
//! // Or pull tokens one at a time
//! let mut scanner = Scanner::new(source, &mut handler);
//! assert_eq!(scanner.next_token().kind(), TokenKind::Var);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literal values and the keyword table
//! - [`scanner`] - The scanner and its per-lexeme recognizers
//! - [`cursor`] - Byte cursor with line tracking
//! - [`stream`] - The finished token sequence
//! - [`ascii`] - Byte classification helpers
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, minus the keywords.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (always stored as `f64`)
//! - **String**: `"hello"` (may span lines, no escapes)
//!
//! ## Operators and Punctuation
//!
//! `( ) { } , . - + ; * / ! != = == < <= > >=`
//!
//! ## Special
//!
//! - **EOF**: End of input marker, empty lexeme

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod scanner;
pub mod stream;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::{scan, Scanner};
pub use stream::TokenStream;
pub use token::{keyword_from_ident, Literal, Token, TokenKind};
