use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve a path against a base directory into a canonical absolute path.
///
/// Absolute paths skip the join but are still canonicalized, so the result is
/// always symlink-free and guaranteed to exist at the time of the call.
pub fn resolve<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Result<PathBuf> {
    let path = path.as_ref();
    let candidate = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.as_ref().join(path)
    };

    fs::canonicalize(&candidate).map_err(|source| Error::PathResolution {
        path: candidate,
        source,
    })
}
