//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod call;
pub mod check;
pub mod describe;
pub mod eval;

use std::io::Write;

use crate::Result;

/// Write a command's output to stdout; a closed pipe surfaces as `CliError::Io`.
pub fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end_matches('\n'))?;
    Ok(())
}
