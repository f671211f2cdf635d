//
// lib.rs
// linestats
//
// Library entry that re-exports the scan, count and report modules so the binary and tests share one implementation.
//
pub mod cli;
pub mod counter;
pub mod error;
pub mod report;
pub mod scanner;

pub use cli::{build_options, Args, Options};
pub use counter::{count_lines, count_text_lines, Decode};
pub use error::{Result, StatsError};
pub use report::{run, Tally};
pub use scanner::scan_dir;
