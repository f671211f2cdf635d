use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, StatsError};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

fn is_hidden_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn is_hidden(entry: &DirEntry) -> bool {
    is_hidden_name(entry.path())
}

fn matches(root: &Path, path: &Path, pattern: &Pattern) -> bool {
    let Ok(rel) = path.strip_prefix(root) else {
        return false;
    };
    let s_rel = rel.to_string_lossy().replace('\\', "/");
    pattern.matches_with(&s_rel, MATCH_OPTIONS)
}

/// A symlink whose target is gone. walkdir reports it as an error because it
/// stats through links; the caller decides whether the name matters.
fn dangling_link(err: &walkdir::Error) -> Option<&Path> {
    if err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    let meta = path.symlink_metadata().ok()?;
    meta.file_type().is_symlink().then_some(path)
}

/// Collects every non-hidden, non-directory path under `root` whose relative
/// path matches `pattern`, in file-name order. Directory symlinks are
/// followed. A dangling link that matches is kept so reading it fails later.
pub fn scan_dir(root: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(StatsError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(|e| e.depth() == 0 || !is_hidden(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => match dangling_link(&err) {
                Some(path) if is_hidden_name(path) || !matches(root, path, pattern) => {
                    debug!(path = %path.display(), "skipping dangling link");
                    continue;
                }
                Some(path) => {
                    files.push(path.to_path_buf());
                    continue;
                }
                None => {
                    return Err(StatsError::Walk {
                        path: err
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| root.to_path_buf()),
                        source: err,
                    })
                }
            },
        };

        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        if matches(root, path, pattern) {
            debug!(path = %path.display(), "matched");
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
