//! Error types for tree path validation.

use std::fmt;

/// Errors returned by the validating path constructors.
///
/// Splitting never fails; these only come from [`TreePath::parse_with`],
/// `str::parse::<TreePath>()` and [`PathSyntax::new`].
///
/// [`TreePath::parse_with`]: super::TreePath::parse_with
/// [`PathSyntax::new`]: super::PathSyntax::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty where a path was required.
    EmptyPath,
    /// A component between two boundaries was empty.
    EmptyComponent { index: usize, path: String },
    /// The delimiter/escape pair cannot describe a path.
    InvalidSyntax { message: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::EmptyPath => write!(f, "Path is empty"),
            PathError::EmptyComponent { index, path } => {
                write!(f, "Empty component at index {} in path '{}'", index, path)
            }
            PathError::InvalidSyntax { message } => {
                write!(f, "Invalid path syntax: {}", message)
            }
        }
    }
}

impl std::error::Error for PathError {}
