use std::io;

use thiserror::Error;

/// Failure to create a directory tree.
///
/// Carries the directory whose creation failed; the underlying
/// [`io::Error`] is available through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("cannot create directory '{dir}': {source}")]
pub struct Error {
    /// The directory path that could not be created.
    pub dir: String,
    /// The filesystem error reported by the OS.
    pub source: io::Error,
}
