mod ics;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "uidfix")]
#[command(about = "Give every VEVENT in an .ics file a fresh globally-unique UID")]
struct Cli {
    /// Input .ics path
    input: PathBuf,

    /// Output path (omit to print to stdout)
    output: Option<PathBuf>,

    /// Overwrite the input file in place
    #[arg(long)]
    in_place: bool,

    /// Domain suffix appended to each generated UID
    #[arg(long, default_value = "modified.local")]
    domain: String,
}

fn main() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let content = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;

    let rewritten = ics::rewrite_uids(&content, &cli.domain)?;

    // In-place wins over an explicit output path; no conflict error
    if cli.in_place {
        std::fs::write(&cli.input, &rewritten.ics)
            .with_context(|| format!("cannot write {}", cli.input.display()))?;
        println!("Rewrote {} event UIDs in {}", rewritten.events, cli.input.display());
    } else if let Some(output) = &cli.output {
        std::fs::write(output, &rewritten.ics)
            .with_context(|| format!("cannot write {}", output.display()))?;
        println!("Rewrote {} event UIDs into {}", rewritten.events, output.display());
    } else {
        // Keep stdout clean so the result can be piped onward
        println!("{}", rewritten.ics);
    }

    Ok(())
}
