//! Application directory enumeration
//!
//! The search list is fixed and ordered: system locations first, then the
//! root-level `/Applications`, then the user's `~/Applications`. A directory
//! that cannot be read is logged and skipped so the others are still searched.

use std::path::{Path, PathBuf};

use tracing::{Span, debug, warn};
use walkdir::WalkDir;

/// Nesting depth searched below each directory (e.g. `Utilities/Terminal.app`)
const MAX_DEPTH: usize = 2;

const BUNDLE_EXTENSION: &str = "app";

/// Well-known application directories in precedence order
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/System/Applications"),
        PathBuf::from("/System/Library/CoreServices/Applications"),
        PathBuf::from("/Applications"),
    ];
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join("Applications"));
    }
    dirs
}

/// Expand a leading `~` to the user's home directory
pub fn expand_tilde(input: &str) -> PathBuf {
    let Some(rest) = input.strip_prefix('~') else {
        return PathBuf::from(input);
    };
    if !(rest.is_empty() || rest.starts_with('/')) {
        // `~user` forms are left alone
        return PathBuf::from(input);
    }
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(input),
    }
}

/// Whether the path has the `.app` extension (case-insensitive)
pub fn has_bundle_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(BUNDLE_EXTENSION))
}

/// Result of scanning the search directories
#[derive(Debug, Default)]
pub struct Enumeration {
    /// Bundle-looking entries in search order
    pub candidates: Vec<PathBuf>,
    /// Directories that could not be read
    pub unreadable: Vec<PathBuf>,
    /// Number of directories that were read
    pub readable: usize,
}

impl Enumeration {
    /// True when not a single directory could be read
    pub fn is_systemic_failure(&self) -> bool {
        self.readable == 0
    }
}

/// Enumerate `.app` entries under each directory, in order.
///
/// Entries inside a bundle are never visited.
pub fn enumerate(search_dirs: &[PathBuf], span: &Span) -> Enumeration {
    let mut result = Enumeration::default();

    for dir in search_dirs {
        if let Err(e) = std::fs::read_dir(dir) {
            warn!(parent: span, dir = %dir.display(), error = %e, "Could not read application directory");
            result.unreadable.push(dir.clone());
            continue;
        }
        result.readable += 1;

        let before = result.candidates.len();
        let mut walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(MAX_DEPTH)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(parent: span, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_dir() || !has_bundle_extension(entry.path()) {
                continue;
            }
            walker.skip_current_dir();
            result.candidates.push(entry.into_path());
        }

        debug!(
            parent: span,
            dir = %dir.display(),
            found = result.candidates.len() - before,
            "Enumerated application directory"
        );
    }

    result
}
