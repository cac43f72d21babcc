//! Capabilities command implementation.
//!
//! Prints the static editor capabilities of the mode, and optionally how the
//! editor treats particular typed characters.

use std::io::Write;

use caboose_lex::Mode;
use tracing::debug;

use crate::commands::traits::Command;
use crate::error::Result;

/// Sample text shown inside the comment forms.
const COMMENT_SAMPLE: &str = "text";

/// Arguments for the capabilities command.
#[derive(Debug, Clone, Default)]
pub struct CapabilitiesArgs {
    /// Characters to look up.
    pub chars: Vec<char>,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Capabilities command handler.
pub struct CapabilitiesCommand {
    args: CapabilitiesArgs,
    mode: Mode,
}

impl Command for CapabilitiesCommand {
    type Args = CapabilitiesArgs;
    type Output = ();

    fn new(args: Self::Args, mode: Mode) -> Self {
        Self { args, mode }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let caps = self.mode.capabilities();

        let electric: Vec<String> = caps.electric_chars.chars().map(String::from).collect();
        let pairs: Vec<String> = caps
            .bracket_pairs()
            .map(|(open, close)| format!("{open}{close}"))
            .collect();

        writeln!(out, "electric:      {}", electric.join(" "))?;
        writeln!(out, "auto-close:    {}", pairs.join(" "))?;
        writeln!(out, "fold:          {}", caps.fold)?;
        writeln!(out, "line comment:  {}", caps.prefix_line_comment(COMMENT_SAMPLE))?;
        writeln!(out, "block comment: {}", caps.wrap_block_comment(COMMENT_SAMPLE))?;

        for &c in &self.args.chars {
            let closes = caps.closing_pair(c).map_or_else(|| "-".to_string(), String::from);
            writeln!(out, "{c}: electric={} closes={closes}", caps.is_electric(c))?;
        }

        if self.args.verbose {
            debug!(queried = self.args.chars.len(), "listed capabilities");
        }
        Ok(())
    }

    fn name() -> &'static str {
        "capabilities"
    }
}

/// Run the capabilities command, printing to stdout.
pub fn run_capabilities(args: CapabilitiesArgs, mode: Mode) -> Result<()> {
    let command = CapabilitiesCommand::new(args, mode);
    let mut stdout = std::io::stdout().lock();
    command.execute(&mut stdout)?;
    debug!(command = CapabilitiesCommand::name(), "done");
    Ok(())
}
