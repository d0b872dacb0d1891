//! Tokenize command implementation.
//!
//! Scans a whole source file and prints its tokens. Lexical errors are
//! printed to the diagnostic stream as they are found; the token dump
//! follows once the scan is complete.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use loxc_util::Emitter;

use crate::commands::common::{render_tokens, Outcome, OutputFormat};
use crate::error::{LoxtError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source file to scan.
    pub file: PathBuf,
    /// How tokens are printed.
    pub format: OutputFormat,
}

/// Scans `args.file`, printing tokens to stdout and diagnostics to stderr.
pub fn run_tokenize(args: TokenizeArgs) -> Result<Outcome> {
    let source = read_source(&args.file)?;

    let start_time = Instant::now();
    let stdout = io::stdout();
    let outcome = tokenize_source(&source, args.format, &mut stdout.lock(), io::stderr())?;

    tracing::debug!(
        file = %args.file.display(),
        elapsed_us = start_time.elapsed().as_micros() as u64,
        ?outcome,
        "tokenize finished"
    );
    Ok(outcome)
}

/// Scans `source`, writing diagnostics to `diagnostics` and tokens to `out`.
pub fn tokenize_source<W: Write, E: Write>(
    source: &str,
    format: OutputFormat,
    out: &mut W,
    diagnostics: E,
) -> Result<Outcome> {
    let mut emitter = Emitter::new(diagnostics);
    let tokens = loxc_lex::scan(source, &mut emitter);
    render_tokens(&tokens, format, out)?;
    Ok(Outcome::from_error_count(emitter.error_count()))
}

/// Reads a source file. Invalid UTF-8 is replaced rather than rejected so
/// the scanner can report it as unexpected characters.
fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        LoxtError::FileOperation(format!("cannot read '{}': {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source");

    Ok(match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
