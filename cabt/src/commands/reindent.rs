//! Reindent command implementation.
//!
//! Rewrites a file with the suggested indentation, or with `--check` lists
//! the lines that would change.

use std::io::Write;
use std::path::PathBuf;

use caboose_lex::{reindent, Mode};
use tracing::info;

use crate::commands::common::read_source;
use crate::commands::traits::Command;
use crate::error::{CabtError, Result};

/// Arguments for the reindent command.
#[derive(Debug, Clone, Default)]
pub struct ReindentArgs {
    /// File to re-indent.
    pub file: PathBuf,
    /// Report changes instead of printing the result.
    pub check: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Reindent command handler.
pub struct ReindentCommand {
    args: ReindentArgs,
    mode: Mode,
}

impl Command for ReindentCommand {
    type Args = ReindentArgs;
    /// Number of lines whose indentation changes.
    type Output = usize;

    fn new(args: Self::Args, mode: Mode) -> Self {
        Self { args, mode }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<usize> {
        let source = read_source(&self.args.file)?;
        let rewritten = reindent(&self.mode, &source);

        let mut changed = 0;
        for (number, (before, after)) in source.lines().zip(rewritten.lines()).enumerate() {
            if before == after {
                continue;
            }
            changed += 1;
            if self.args.check {
                writeln!(out, "{}:{}: {}", self.args.file.display(), number + 1, after.trim_start())?;
            }
        }

        if !self.args.check {
            out.write_all(rewritten.as_bytes())?;
        }
        if self.args.verbose {
            info!(path = %self.args.file.display(), changed, "re-indented");
        }
        Ok(changed)
    }

    fn name() -> &'static str {
        "reindent"
    }
}

/// Run the reindent command, printing to stdout.
///
/// With `check` set, fails when any line would change.
pub fn run_reindent(args: ReindentArgs, mode: Mode) -> Result<()> {
    let check = args.check;
    let command = ReindentCommand::new(args, mode);
    let mut stdout = std::io::stdout().lock();
    let changed = command.execute(&mut stdout)?;
    stdout.flush()?;
    if check && changed > 0 {
        return Err(CabtError::CheckFailed(changed));
    }
    info!(command = ReindentCommand::name(), changed, "done");
    Ok(())
}
