//! Tokens command implementation.
//!
//! Prints every line of the input files as a list of `style:text` tokens,
//! which is handy for checking how the editor will color a file.

use std::io::Write;
use std::path::PathBuf;

use caboose_lex::{highlight_lines, Mode};
use tracing::debug;

use crate::commands::common::{read_source, require_files, style_label};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to tokenize.
    pub files: Vec<PathBuf>,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    mode: Mode,
}

impl TokensCommand {
    /// Writes the token listing of one source text.
    fn write_source<W: Write>(&self, source: &str, out: &mut W) -> Result<usize> {
        let mut count = 0;
        for (number, (line, text)) in highlight_lines(&self.mode, source)
            .iter()
            .zip(source.lines())
            .enumerate()
        {
            write!(out, "{:>4} |", number + 1)?;
            for (token, style) in line.tokens(text) {
                if style.is_none() && token.trim().is_empty() {
                    continue;
                }
                write!(out, " {}:{}", style_label(style), token)?;
                count += 1;
            }
            writeln!(out)?;
        }
        Ok(count)
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
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
            let count = self.write_source(&source, out)?;
            if self.args.verbose {
                debug!(path = %path.display(), tokens = count, "tokenized file");
            }
            total += count;
        }
        Ok(total)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command, printing to stdout.
pub fn run_tokens(args: TokensArgs, mode: Mode) -> Result<()> {
    let command = TokensCommand::new(args, mode);
    let mut stdout = std::io::stdout().lock();
    let total = command.execute(&mut stdout)?;
    debug!(command = TokensCommand::name(), tokens = total, "done");
    Ok(())
}
