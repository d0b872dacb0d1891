//! Command modules for the loxt CLI.
//!
//! Each mode of the tool is implemented in its own file: whole-file
//! scanning in [`tokenize`] and the interactive prompt in [`repl`].

pub mod common;

pub mod repl;
pub mod tokenize;

// Re-export command types and functions
pub use repl::{run_repl, ReplArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
