//! Common types and utilities for loxt commands.
//!
//! This module provides the output format, scan outcome and token
//! rendering shared by the file and REPL commands.

use std::io::Write;
use std::process::ExitCode;

use clap::ValueEnum;
use loxc_lex::{Literal, Token, TokenStream};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Exit Status
// ============================================================================

/// Exit status when the scanned source had lexical errors.
pub const EXIT_LEXICAL_ERROR: u8 = 65;

/// Exit status for host failures (unreadable file, bad configuration).
pub const EXIT_HOST_ERROR: u8 = 1;

/// What a scan found, as far as the exit status is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No lexical errors.
    Clean,
    /// At least one lexical error was reported.
    LexicalErrors,
}

impl Outcome {
    /// Maps an error count to an outcome.
    pub fn from_error_count(errors: usize) -> Self {
        if errors == 0 {
            Self::Clean
        } else {
            Self::LexicalErrors
        }
    }

    /// The process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::LexicalErrors => EXIT_LEXICAL_ERROR,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

/// JSON shape of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    literal: serde_json::Value,
    line: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let literal = match token.literal() {
            Literal::Number(value) => serde_json::Value::from(*value),
            Literal::String(value) => serde_json::Value::from(value.as_str()),
            Literal::Null => serde_json::Value::Null,
        };
        Self {
            kind: token.kind().name(),
            lexeme: token.lexeme(),
            literal,
            line: token.line(),
        }
    }
}

/// Writes `tokens` to `out` in the requested format.
pub fn render_tokens<W: Write>(tokens: &TokenStream, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", tokens)?,
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}
