//! loxc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the small set of shared types every loxc phase leans
//! on. Today that is diagnostic reporting: the scanner (and any later phase)
//! reports problems through the [`ErrorSink`] collaborator instead of printing
//! or aborting, and the host decides what to do with them.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. BATCH DIAGNOSTICS
//!    Reporting an error never stops a phase. Sinks accumulate diagnostics
//!    and expose a sticky "had error" flag the host turns into an exit status.
//!
//! 2. INJECTED COLLABORATORS
//!    Phases receive `&mut dyn ErrorSink`. Tests pass a recording
//!    [`Handler`], the CLI passes a streaming [`Emitter`].
//
// ============================================================================
// DIAGNOSTICS
// ============================================================================
//
// A diagnostic is line-oriented: the Lox front end only tracks 1-based line
// numbers, so a diagnostic carries `line`, an optional `context` fragment
// (e.g. " at 'foo'"), a message and an optional code. Rendering follows the
// classic `[line N] Error<context>: <message>` layout.
//
// ============================================================================
// HASHING
// ============================================================================
//
// Fixed lookup tables (the keyword table, for one) use FxHashMap. Keys are
// short ASCII strings, where Fx is considerably faster than SipHash and
// HashDoS resistance buys nothing.

pub mod diagnostic;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Emitter, ErrorSink, Handler,
};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
