//! Indent command implementation.
//!
//! Compares the indentation each line actually has with the one the editor
//! would suggest, and marks the lines that disagree.

use std::io::Write;
use std::path::PathBuf;

use caboose_lex::{highlight_lines, Mode};
use tracing::{debug, info};

use crate::commands::common::{line_indentation, read_source, require_files};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the indent command.
#[derive(Debug, Clone, Default)]
pub struct IndentArgs {
    /// Files to inspect.
    pub files: Vec<PathBuf>,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Indent command handler.
pub struct IndentCommand {
    args: IndentArgs,
    mode: Mode,
}

impl IndentCommand {
    /// Writes the indentation report for one source text.
    ///
    /// Columns are: line number, actual indentation, suggestion (`-` when
    /// the mode has no opinion) and a `*` on mismatching non-blank lines.
    fn write_source<W: Write>(&self, source: &str, out: &mut W) -> Result<usize> {
        let mut mismatches = 0;
        for (number, (line, text)) in highlight_lines(&self.mode, source)
            .iter()
            .zip(source.lines())
            .enumerate()
        {
            let actual = line_indentation(text, self.mode.tab_size());
            let suggested = line.indent.map_or_else(|| "-".to_string(), |c| c.to_string());
            let mismatch = !text.trim().is_empty()
                && line.indent.is_some_and(|c| i64::from(c) != actual as i64);
            if mismatch {
                mismatches += 1;
            }
            writeln!(
                out,
                "{:>4} {:>3} {:>3} {} | {}",
                number + 1,
                actual,
                suggested,
                if mismatch { '*' } else { ' ' },
                text
            )?;
        }
        Ok(mismatches)
    }
}

impl Command for IndentCommand {
    type Args = IndentArgs;
    type Output = usize;

    fn new(args: Self::Args, mode: Mode) -> Self {
        Self { args, mode }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<usize> {
        require_files(&self.args.files)?;

        let mut total = 0;
        for path in &self.args.files {
            let source = read_source(path)?;
            if self.args.files.len() > 1 {
                writeln!(out, "==> {} <==", path.display())?;
            }
            let mismatches = self.write_source(&source, out)?;
            if self.args.verbose {
                debug!(path = %path.display(), mismatches, "checked indentation");
            }
            total += mismatches;
        }
        Ok(total)
    }

    fn name() -> &'static str {
        "indent"
    }
}

/// Run the indent command, printing to stdout.
pub fn run_indent(args: IndentArgs, mode: Mode) -> Result<()> {
    let command = IndentCommand::new(args, mode);
    let mut stdout = std::io::stdout().lock();
    let mismatches = command.execute(&mut stdout)?;
    if mismatches > 0 {
        info!(command = IndentCommand::name(), mismatches, "lines differ from the suggested indentation");
    }
    Ok(())
}
