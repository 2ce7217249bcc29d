//! Delimiter and escape characters used to read a path.

use super::error::PathError;

/// Default component delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// Default escape character.
pub const DEFAULT_ESCAPE: char = '\\';

/// The pair of characters that give a path its structure.
///
/// An escape character binds to the single character after it, so an escaped
/// delimiter is component text rather than a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSyntax {
    delimiter: char,
    escape: char,
}

impl PathSyntax {
    /// Creates a syntax from a delimiter and an escape character.
    ///
    /// Returns `PathError::InvalidSyntax` when both characters are the same,
    /// since every delimiter would then also be an escape.
    ///
    /// # Example
    ///
    /// ```
    /// use nodepath::path::PathSyntax;
    ///
    /// let slashes = PathSyntax::new('/', '%').unwrap();
    /// assert_eq!(slashes.delimiter(), '/');
    /// assert!(PathSyntax::new('.', '.').is_err());
    /// ```
    pub fn new(delimiter: char, escape: char) -> Result<Self, PathError> {
        if delimiter == escape {
            return Err(PathError::InvalidSyntax {
                message: format!(
                    "delimiter and escape must differ (both are '{}')",
                    delimiter
                ),
            });
        }
        Ok(Self { delimiter, escape })
    }

    /// Returns the component delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the escape character.
    pub fn escape(&self) -> char {
        self.escape
    }
}

impl Default for PathSyntax {
    /// Dot-delimited, backslash-escaped paths such as `a.b\.c`.
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            escape: DEFAULT_ESCAPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_syntax() {
        let syntax = PathSyntax::default();
        assert_eq!(syntax.delimiter(), '.');
        assert_eq!(syntax.escape(), '\\');
    }

    #[test]
    fn test_identical_characters_rejected() {
        let err = PathSyntax::new('/', '/').unwrap_err();
        assert!(matches!(err, PathError::InvalidSyntax { .. }));
        assert!(err.to_string().contains("'/'"));
    }
}
