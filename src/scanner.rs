use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Collect the basenames of every header file under `root`.
///
/// Only regular files with a case-insensitive `.h` extension are considered;
/// symlinks and special files are skipped. With `recursive` unset, only the
/// immediate children of `root` are inspected. A basename matching
/// `ignore_pattern` anywhere (substring search, not a full match) is excluded.
///
/// Only basenames are returned: generated imports reference headers by
/// filename and leave path lookup to the consuming build system. Names are
/// deduplicated and come back in lexicographic order, so scans over an
/// unchanged tree always yield the same sequence.
pub fn scan(root: &Path, recursive: bool, ignore_pattern: Option<&str>) -> Result<BTreeSet<String>> {
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    // Compiled once per scan, reused for every entry.
    let ignored = match ignore_pattern {
        Some(pattern) => Some(Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?),
        None => None,
    };

    let walker = if recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    let mut headers = BTreeSet::new();
    for entry in walker {
        let entry = entry.map_err(|source| Error::Enumeration {
            path: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let is_header = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("h"));
        if !is_header {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        if ignored.as_ref().map_or(false, |re| re.is_match(&filename)) {
            continue;
        }

        headers.insert(filename);
    }

    Ok(headers)
}
