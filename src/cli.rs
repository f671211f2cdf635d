use std::path::PathBuf;

use clap::Parser;
use glob::Pattern;

use crate::counter::Decode;
use crate::error::{Result, StatsError};

pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_PATTERN: &str = "**/*.ts";
pub const DEFAULT_LABEL: &str = "typescript stats";
pub const DEFAULT_THRESHOLD: usize = 400;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan, relative to the current directory
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Recursive glob matched against paths relative to ROOT
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// First line of the summary
    #[arg(short, long, default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Print "<path>: <lines>" for every file above the threshold
    #[arg(short, long)]
    pub warn: bool,

    /// Line count a file must exceed to be reported (implies --warn)
    #[arg(short, long, value_name = "LINES")]
    pub threshold: Option<usize>,

    /// Decode non UTF-8 files as Windows-1252 instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug)]
pub struct Options {
    pub root: PathBuf,
    pub pattern: Pattern,
    pub label: String,
    /// `Some` selects threshold mode.
    pub threshold: Option<usize>,
    pub decode: Decode,
}

pub fn build_options(args: &Args) -> Result<Options> {
    let pattern = Pattern::new(&args.pattern).map_err(|source| StatsError::InvalidPattern {
        pattern: args.pattern.clone(),
        source,
    })?;

    let threshold = match (args.threshold, args.warn) {
        (Some(n), _) => Some(n),
        (None, true) => Some(DEFAULT_THRESHOLD),
        (None, false) => None,
    };

    Ok(Options {
        root: args.root.clone(),
        pattern,
        label: args.label.clone(),
        threshold,
        decode: if args.lossy {
            Decode::Lossy
        } else {
            Decode::Strict
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("linestats").chain(argv.iter().copied()))
            .expect("args should parse")
    }

    #[test]
    fn no_arguments_reproduce_plain_mode() {
        let opts = build_options(&parse(&[])).unwrap();
        assert_eq!(opts.root, PathBuf::from("src"));
        assert_eq!(opts.pattern.as_str(), "**/*.ts");
        assert_eq!(opts.label, "typescript stats");
        assert_eq!(opts.threshold, None);
        assert_eq!(opts.decode, Decode::Strict);
    }

    #[test]
    fn warn_uses_default_threshold() {
        let opts = build_options(&parse(&["--warn"])).unwrap();
        assert_eq!(opts.threshold, Some(400));
    }

    #[test]
    fn explicit_threshold_implies_threshold_mode() {
        let opts = build_options(&parse(&["-t", "50", "lib"])).unwrap();
        assert_eq!(opts.threshold, Some(50));
        assert_eq!(opts.root, PathBuf::from("lib"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = build_options(&parse(&["--pattern", "src/[.ts"])).unwrap_err();
        assert!(matches!(err, StatsError::InvalidPattern { .. }));
    }
}
