//! `dress completions`: shell completion scripts.

use std::io::Write;

use anyhow::Context;
use clap::Args;
use clap_complete::{Shell, generate};

const BIN_NAME: &str = "dress";

/// Arguments for `dress completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate the script for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to stdout.
pub fn run_completions(shell: Shell, command: &mut clap::Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_completions(shell, command, &mut out)
}

fn write_completions(
    shell: Shell,
    command: &mut clap::Command,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    generate(shell, command, BIN_NAME, out);
    out.flush()
        .with_context(|| format!("Failed to write {shell} completions"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_names_subcommands() {
        let mut command = clap::Command::new(BIN_NAME)
            .subcommand(clap::Command::new("order"))
            .subcommand(clap::Command::new("demo"));
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut command, &mut out).expect("generate");

        let script = String::from_utf8(out).expect("utf8");
        assert!(script.contains("dress"));
        assert!(script.contains("order"));
        assert!(script.contains("demo"));
    }
}
