use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use linestats::{build_options, run, Args};

// ---------------------------
// Logging
// ---------------------------

fn init_logging(debug: bool) {
    let default_level = if debug { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ---------------------------
// Main
// ---------------------------

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let opts = build_options(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&opts, &mut out).with_context(|| format!("line count of {:?} failed", opts.root))?;
    out.flush()?;

    Ok(())
}
