//! Owned tree path values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PathError;
use super::escape::{escape_component, unescape_component};
use super::parser::{join_with, split_with};
use super::syntax::PathSyntax;

/// What to do with empty components (`a..b`, `.a`, `a.`) when building a
/// [`TreePath`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyComponents {
    /// Keep them, one per unescaped delimiter.
    #[default]
    Preserve,
    /// Fail with `PathError::EmptyComponent`.
    Reject,
    /// Drop them.
    Collapse,
}

/// A path split into owned components.
///
/// Components keep their escape sequences, so `Display` reproduces the parsed
/// text whenever no components were collapsed.
///
/// # Example
///
/// ```
/// use nodepath::path::TreePath;
///
/// let path = TreePath::parse(r"config.servers.eu\.west");
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.name().as_deref(), Some("eu.west"));
/// assert_eq!(path.parent().unwrap().to_string(), "config.servers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreePath {
    components: Vec<String>,
    syntax: PathSyntax,
}

impl TreePath {
    /// Parses a path with the default syntax, keeping empty components.
    ///
    /// Never fails.
    pub fn parse(path: &str) -> Self {
        let syntax = PathSyntax::default();
        Self::from_components(split_with(path, &syntax), syntax)
    }

    /// Parses a path with an explicit syntax and empty-component policy.
    pub fn parse_with(
        path: &str,
        syntax: &PathSyntax,
        policy: EmptyComponents,
    ) -> Result<Self, PathError> {
        let components = split_with(path, syntax);

        let components = match policy {
            EmptyComponents::Preserve => components,
            EmptyComponents::Reject => {
                if let Some(index) = components.iter().position(|c| c.is_empty()) {
                    return Err(PathError::EmptyComponent {
                        index,
                        path: path.to_string(),
                    });
                }
                components
            }
            EmptyComponents::Collapse => {
                components.into_iter().filter(|c| !c.is_empty()).collect()
            }
        };

        Ok(Self::from_components(components, *syntax))
    }

    /// Builds a path from raw node names, escaping each one.
    ///
    /// ```
    /// use nodepath::path::{PathSyntax, TreePath};
    ///
    /// let path = TreePath::from_names(["servers", "eu.west"], PathSyntax::default());
    /// assert_eq!(path.to_string(), r"servers.eu\.west");
    /// ```
    pub fn from_names<I, S>(names: I, syntax: PathSyntax) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let components = names
            .into_iter()
            .map(|name| escape_component(name.as_ref(), &syntax))
            .collect();
        Self { components, syntax }
    }

    fn from_components(components: Vec<&str>, syntax: PathSyntax) -> Self {
        Self {
            components: components.into_iter().map(str::to_string).collect(),
            syntax,
        }
    }

    /// Returns the escaped components.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Returns the syntax this path was parsed with.
    pub fn syntax(&self) -> PathSyntax {
        self.syntax
    }

    /// Number of components.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// True when the path has no components (parsed from `""`).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// True for a single-component path, which has no parent.
    pub fn is_root_level(&self) -> bool {
        self.components.len() == 1
    }

    /// Returns the last component, still escaped.
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Returns the unescaped name of the last component.
    pub fn name(&self) -> Option<String> {
        self.last()
            .map(|component| unescape_component(component, &self.syntax))
    }

    /// Returns the unescaped names of all components.
    pub fn names(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|component| unescape_component(component, &self.syntax))
            .collect()
    }

    /// Returns the path without its last component.
    ///
    /// `None` when the path has fewer than two components.
    pub fn parent(&self) -> Option<TreePath> {
        if self.components.len() < 2 {
            return None;
        }
        Some(Self {
            components: self.components[..self.components.len() - 1].to_vec(),
            syntax: self.syntax,
        })
    }

    /// Iterates over every ancestor, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = TreePath> {
        std::iter::successors(self.parent(), TreePath::parent)
    }

    /// Returns a new path with `name` escaped and appended.
    pub fn child(&self, name: &str) -> TreePath {
        let mut components = self.components.clone();
        components.push(escape_component(name, &self.syntax));
        Self {
            components,
            syntax: self.syntax,
        }
    }

    /// True when `prefix` names this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &TreePath) -> bool {
        self.syntax == prefix.syntax && self.components.starts_with(&prefix.components)
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_with(&self.components, &self.syntax))
    }
}

impl FromStr for TreePath {
    type Err = PathError;

    /// Strict parse: the path must be non-empty and have no empty components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Self::parse_with(s, &PathSyntax::default(), EmptyComponents::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        for text in ["a", "a.b.c", r"a\.b.c", r"x.y\\.z", "", ".lead", "trail."] {
            assert_eq!(TreePath::parse(text).to_string(), text);
        }
    }

    #[test]
    fn test_reject_reports_first_empty_index() {
        let err = TreePath::parse_with("a..b.", &PathSyntax::default(), EmptyComponents::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            PathError::EmptyComponent {
                index: 1,
                path: "a..b.".to_string()
            }
        );
    }

    #[test]
    fn test_collapse_drops_empty() {
        let path =
            TreePath::parse_with(".a..b.", &PathSyntax::default(), EmptyComponents::Collapse)
                .unwrap();
        assert_eq!(path.components(), ["a", "b"]);
        assert_eq!(path.to_string(), "a.b");
    }
}
