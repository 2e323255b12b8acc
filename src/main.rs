//! CLI entry point for validating, scoring and generating lock patterns

use clap::Parser;
use patternlock::io::cli::{Cli, CommandRunner};

fn main() -> patternlock::Result<()> {
    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out)
}
