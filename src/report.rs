use std::io::Write;

use tracing::{debug, info};

use crate::cli::Options;
use crate::counter::count_lines;
use crate::error::Result;
use crate::scanner::scan_dir;

/// Running totals for one scan.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub total_lines: usize,
    pub file_count: usize,
}

impl Tally {
    pub fn record(&mut self, lines: usize) {
        self.total_lines += lines;
        self.file_count += 1;
    }
}

pub fn write_summary<W: Write>(out: &mut W, label: &str, tally: &Tally) -> Result<()> {
    writeln!(out, "{label}")?;
    writeln!(out, "lines {}", tally.total_lines)?;
    writeln!(out, "files {}", tally.file_count)?;
    Ok(())
}

/// Scans, counts and reports. Warning lines are written as files are read;
/// the summary only once every file has been counted. Any error aborts the
/// run before the summary.
pub fn run<W: Write>(opts: &Options, out: &mut W) -> Result<Tally> {
    info!(root = %opts.root.display(), pattern = opts.pattern.as_str(), "scanning");
    let files = scan_dir(&opts.root, &opts.pattern)?;

    let mut tally = Tally::default();
    for path in &files {
        let lines = count_lines(path, opts.decode)?;
        debug!(path = %path.display(), lines, "counted");

        if let Some(threshold) = opts.threshold {
            if lines > threshold {
                writeln!(out, "{}: {}", path.display(), lines)?;
            }
        }
        tally.record(lines);
    }

    info!(
        lines = tally.total_lines,
        files = tally.file_count,
        "scan complete"
    );
    write_summary(out, &opts.label, &tally)?;
    Ok(tally)
}
