//! Headless replay binary.
//!
//! Example: `tetris-replay --seed 7 --actions "LLUDDD" --ticks 40 --pretty`

use anyhow::{Context, Result};
use clap::Parser;

use pivot_tetris::logging::init_file_logging;
use pivot_tetris::replay::{run_replay, ReplayArgs};

fn main() -> Result<()> {
    let args = ReplayArgs::parse();
    init_file_logging(args.log_path.as_deref())?;

    let report = run_replay(&args)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serialize replay report")?;
    println!("{json}");
    Ok(())
}
