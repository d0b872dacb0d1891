//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Scanner struct, main loop and single-byte dispatch
//! - `operator` - One/two character operators and `/`
//! - `comment` - Line comment skipping
//! - `string` - String literal recognition
//! - `number` - Number literal recognition
//! - `identifier` - Identifier and keyword recognition

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan, Scanner};
