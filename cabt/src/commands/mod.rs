//! Command modules for the cabt CLI.
//!
//! Each subcommand is implemented in its own file and writes its report to
//! the writer it is given, so the commands can be tested without a process.

pub mod traits;
pub mod common;

pub mod capabilities;
pub mod indent;
pub mod reindent;
pub mod tokens;

// Re-export command types and functions
pub use capabilities::{run_capabilities, CapabilitiesArgs};
pub use indent::{run_indent, IndentArgs};
pub use reindent::{run_reindent, ReindentArgs};
pub use tokens::{run_tokens, TokensArgs};
