//! Derivation of the directory portion of a path string.

/// Returns the directory portion of `path`: every `/`-separated segment
/// except the last, each followed by `/`.
///
/// The last segment is assumed to be a filename and is dropped, including
/// when it is empty (input with a trailing `/`). A path with no `/` has no
/// directory portion and yields `""`. Empty segments are preserved as-is.
///
/// ```
/// use mkpath::containing_dir;
///
/// assert_eq!(containing_dir("a/b/c.txt"), "a/b/");
/// assert_eq!(containing_dir("file.txt"), "");
/// assert_eq!(containing_dir("a/b/"), "a/b/");
/// ```
pub fn containing_dir(path: &str) -> &str {
    // The prefix up to and including the last separator is exactly the
    // split-on-'/' segments minus the last one, rejoined with a '/' after
    // each.
    match path.rfind('/') {
        Some(pos) => &path[..=pos],
        None => "",
    }
}
