//! REPL command implementation.
//!
//! Reads one line at a time and prints its tokens. Each line is scanned on
//! its own with a fresh scanner and error emitter, so line numbers restart
//! at 1 and an error on one line never affects the next.

use std::io::{self, BufRead, Write};

use loxc_util::Emitter;

use crate::commands::common::{render_tokens, OutputFormat};
use crate::error::Result;

/// Arguments for the REPL.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Printed before each line is read.
    pub prompt: String,
    /// How tokens are printed.
    pub format: OutputFormat,
}

/// Runs the REPL on the process's standard streams until end of input.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl_loop(&args, stdin.lock(), &mut stdout.lock(), &mut io::stderr())
}

/// The REPL loop over arbitrary streams.
pub fn repl_loop<R, W, E>(
    args: &ReplArgs,
    mut input: R,
    out: &mut W,
    diagnostics: &mut E,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = String::new();
    let mut lines_read = 0usize;

    loop {
        write!(out, "{}", args.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        lines_read += 1;

        let mut emitter = Emitter::new(&mut *diagnostics);
        let tokens = loxc_lex::scan(&line, &mut emitter);
        render_tokens(&tokens, args.format, out)?;

        if emitter.error_count() > 0 {
            tracing::debug!(
                line = lines_read,
                errors = emitter.error_count(),
                "line had lexical errors"
            );
        }
    }

    // Leave the shell prompt on a fresh line.
    writeln!(out)?;
    tracing::debug!(lines = lines_read, "repl finished");
    Ok(())
}
