//! Directory materialization over [`std::fs`].

use std::fs;

use tracing::{debug, trace};

use crate::error::Error;
use crate::path::containing_dir;

/// Creates `dir` and all missing ancestor directories.
///
/// A pre-existing directory is success, and so is the empty string: an
/// input with no directory portion resolves to the current working
/// directory, which needs nothing created.
pub fn ensure_dir(dir: &str) -> Result<(), Error> {
    if dir.is_empty() {
        trace!("empty directory portion, nothing to create");
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| Error {
        dir: dir.to_string(),
        source,
    })?;
    debug!("ensured directory '{dir}'");
    Ok(())
}

/// Creates the containing directory tree for one file path.
pub fn ensure_containing_dir(path: &str) -> Result<(), Error> {
    ensure_dir(containing_dir(path))
}

/// Creates the containing directory tree for each path, in argument order.
///
/// Processing stops at the first failure; later paths are left untouched.
pub fn ensure_all<I, S>(paths: I) -> Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for path in paths {
        ensure_containing_dir(path.as_ref())?;
    }
    Ok(())
}
