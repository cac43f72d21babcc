//! Command trait for the cabt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to ensure consistency across the application.

use std::io::Write;

use caboose_lex::Mode;

use crate::error::Result;

/// Standard command trait that all cabt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance driving `mode`.
    fn new(args: Self::Args, mode: Mode) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
