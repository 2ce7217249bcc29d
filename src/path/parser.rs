//! Component splitting and parent derivation for delimited paths.
//!
//! The parser only decides where component boundaries fall. Escape sequences
//! are left in place, so joining the components with the delimiter gives back
//! the input unchanged:
//!
//! ```
//! use nodepath::path::{join, split};
//!
//! let parts = split(r"a.b\.c.d");
//! assert_eq!(parts, vec!["a", r"b\.c", "d"]);
//! assert_eq!(join(&parts), r"a.b\.c.d");
//! ```

use super::syntax::PathSyntax;

/// Splits a path into components using the default syntax (`.` and `\`).
///
/// An empty path has no components. Leading, trailing and doubled delimiters
/// produce empty components, one boundary per unescaped delimiter.
///
/// # Example
///
/// ```
/// use nodepath::path::split;
///
/// assert_eq!(split("root.child"), vec!["root", "child"]);
/// assert_eq!(split(r"node-with-escaped\.dot"), vec![r"node-with-escaped\.dot"]);
/// assert!(split("").is_empty());
/// ```
pub fn split(path: &str) -> Vec<&str> {
    split_with(path, &PathSyntax::default())
}

/// Splits a path into components using the given syntax.
///
/// Components borrow from `path`.
pub fn split_with<'a>(path: &'a str, syntax: &PathSyntax) -> Vec<&'a str> {
    if path.is_empty() {
        return Vec::new();
    }

    let step = syntax.delimiter().len_utf8();
    let mut components = Vec::new();
    let mut start = 0;
    for boundary in boundaries(path, *syntax) {
        components.push(&path[start..boundary]);
        start = boundary + step;
    }
    components.push(&path[start..]);
    components
}

/// Returns the parent of a path using the default syntax.
///
/// The parent is every component but the last, rejoined with the delimiter.
/// Returns `None` for an empty path or a path with a single component. An
/// absent path is handled with `Option::and_then`:
///
/// ```
/// use nodepath::path::parent_path;
///
/// assert_eq!(parent_path(r"a.b\.c.d"), Some(r"a.b\.c"));
/// assert_eq!(parent_path("a"), None);
/// assert_eq!(None::<&str>.and_then(parent_path), None);
/// ```
pub fn parent_path(path: &str) -> Option<&str> {
    parent_path_with(path, &PathSyntax::default())
}

/// Returns the parent of a path using the given syntax.
///
/// Rejoining all but the last component reproduces the input up to its last
/// unescaped delimiter, so the parent is returned as a slice of `path`.
pub fn parent_path_with<'a>(path: &'a str, syntax: &PathSyntax) -> Option<&'a str> {
    let last = boundaries(path, *syntax).last()?;
    Some(&path[..last])
}

/// Joins components with the default delimiter.
pub fn join<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with(components, &PathSyntax::default())
}

/// Joins components with the delimiter of the given syntax.
///
/// Components are written verbatim; use [`escape_component`] first when a
/// component is a raw node name.
///
/// [`escape_component`]: super::escape_component
pub fn join_with<I, S>(components: I, syntax: &PathSyntax) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, component) in components.into_iter().enumerate() {
        if i > 0 {
            joined.push(syntax.delimiter());
        }
        joined.push_str(component.as_ref());
    }
    joined
}

/// Byte offsets of the unescaped delimiters in `path`, left to right.
///
/// An escape character consumes the character after it, whatever that is,
/// so `\\.` is an escaped backslash followed by a real boundary.
fn boundaries(path: &str, syntax: PathSyntax) -> impl Iterator<Item = usize> + '_ {
    let mut escape_pending = false;
    path.char_indices().filter_map(move |(offset, ch)| {
        if escape_pending {
            escape_pending = false;
            None
        } else if ch == syntax.escape() {
            escape_pending = true;
            None
        } else if ch == syntax.delimiter() {
            Some(offset)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_skip_escaped_delimiters() {
        let offsets: Vec<usize> = boundaries(r"a.b\.c.d", PathSyntax::default()).collect();
        assert_eq!(offsets, vec![1, 6]);
    }

    #[test]
    fn test_escaped_escape_does_not_protect_delimiter() {
        assert_eq!(split(r"a\\.b"), vec![r"a\\", "b"]);
        assert_eq!(parent_path(r"a\\.b"), Some(r"a\\"));
    }

    #[test]
    fn test_trailing_escape_kept() {
        assert_eq!(split(r"a.b\"), vec!["a", r"b\"]);
    }

    #[test]
    fn test_multibyte_delimiter() {
        let syntax = PathSyntax::new('→', '^').unwrap();
        assert_eq!(split_with("é→ü^→x→z", &syntax), vec!["é", "ü^→x", "z"]);
        assert_eq!(parent_path_with("é→ü^→x→z", &syntax), Some("é→ü^→x"));
    }

    #[test]
    fn test_join_empty() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(join(empty), "");
    }
}
