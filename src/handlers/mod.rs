//! Command-line handlers module
//!
//! This module turns command-line input into operations on the language
//! context.

pub mod commands;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
