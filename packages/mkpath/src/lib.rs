//! mkpath - materialize the containing directory for file paths.
//!
//! Each input path is treated as a file path: the final `/`-separated
//! segment is assumed to be a filename and dropped, and the remaining
//! directory prefix is created together with any missing ancestors. Paths
//! are plain strings split on `/` on every platform; nothing is normalized
//! and symlinks are not resolved.

pub mod error;
pub mod fs;
pub mod path;

pub use error::Error;
pub use fs::{ensure_all, ensure_containing_dir, ensure_dir};
pub use path::containing_dir;
