//! Path-keyed storage for tree nodes.
//!
//! `NodeStore` keeps nodes in insertion order under their full path string
//! (`servers.eu\.west.host`). Hierarchy is never stored explicitly: parents,
//! ancestors and children are found by running the path parser over keys and
//! looking the results up by string.
//!
//! # Example
//!
//! ```
//! use nodepath::store::{NodeStore, TreeNode};
//!
//! let mut store = NodeStore::new();
//! store.insert("servers", TreeNode::mapping("servers"));
//! store.insert(r"servers.eu\.west", TreeNode::mapping("eu.west"));
//! store.insert(r"servers.eu\.west.host", TreeNode::scalar("host", "10.0.0.1"));
//!
//! let (key, parent) = store.parent_of(r"servers.eu\.west.host").unwrap();
//! assert_eq!(key, r"servers.eu\.west");
//! assert_eq!(parent.name, "eu.west");
//! ```

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::node::TreeNode;
use crate::path::{parent_path_with, split_with, unescape_component, PathSyntax};

/// Tree nodes indexed by full path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStore {
    nodes: IndexMap<String, TreeNode>,
    syntax: PathSyntax,
}

impl NodeStore {
    /// Creates an empty store for dot-delimited, backslash-escaped paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that reads keys with `syntax`.
    pub fn with_syntax(syntax: PathSyntax) -> Self {
        Self {
            nodes: IndexMap::new(),
            syntax,
        }
    }

    /// Returns the syntax used to read keys.
    pub fn syntax(&self) -> PathSyntax {
        self.syntax
    }

    /// Inserts a node under `path`, returning the node it replaced.
    pub fn insert(&mut self, path: impl Into<String>, node: TreeNode) -> Option<TreeNode> {
        let path = path.into();
        let previous = self.nodes.insert(path, node);
        if previous.is_some() {
            debug!("replaced existing tree node");
        }
        previous
    }

    /// Inserts a marker node named after the last component of `path`.
    ///
    /// Returns false if `path` was already present; the existing node is kept.
    pub fn insert_path(&mut self, path: &str) -> bool {
        if self.nodes.contains_key(path) {
            return false;
        }
        let name = split_with(path, &self.syntax)
            .last()
            .map(|component| unescape_component(component, &self.syntax))
            .unwrap_or_default();
        self.nodes.insert(path.to_string(), TreeNode::marker(name));
        true
    }

    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        self.nodes.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over `(path, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.nodes.iter().map(|(path, node)| (path.as_str(), node))
    }

    /// Looks up the immediate parent of `path`.
    ///
    /// Returns `None` when `path` has no parent or the parent is not stored.
    /// `path` itself does not need to be stored.
    pub fn parent_of(&self, path: &str) -> Option<(&str, &TreeNode)> {
        let parent = parent_path_with(path, &self.syntax)?;
        trace!(path, parent, "parent lookup");
        self.entry(parent)
    }

    /// Returns the stored ancestors of `path`, nearest first.
    ///
    /// Ancestors missing from the store are skipped, not treated as the end
    /// of the chain.
    pub fn ancestors(&self, path: &str) -> Vec<(&str, &TreeNode)> {
        let mut found = Vec::new();
        let mut current = parent_path_with(path, &self.syntax);
        while let Some(ancestor) = current {
            if let Some(entry) = self.entry(ancestor) {
                found.push(entry);
            }
            current = parent_path_with(ancestor, &self.syntax);
        }
        found
    }

    /// Returns the closest stored ancestor of `path`.
    pub fn nearest_ancestor(&self, path: &str) -> Option<(&str, &TreeNode)> {
        let mut current = parent_path_with(path, &self.syntax);
        while let Some(ancestor) = current {
            if let Some(entry) = self.entry(ancestor) {
                return Some(entry);
            }
            current = parent_path_with(ancestor, &self.syntax);
        }
        None
    }

    /// Returns the node stored at `path`, or else its closest stored ancestor.
    ///
    /// `None` only when neither `path` nor any ancestor is stored.
    pub fn resolve(&self, path: &str) -> Option<(&str, &TreeNode)> {
        self.entry(path).or_else(|| self.nearest_ancestor(path))
    }

    /// Returns the stored paths whose parent is exactly `path`, in insertion
    /// order.
    pub fn children_of(&self, path: &str) -> Vec<&str> {
        self.nodes
            .keys()
            .filter(|key| parent_path_with(key, &self.syntax) == Some(path))
            .map(String::as_str)
            .collect()
    }

    /// Returns the stored paths that have no parent.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .keys()
            .filter(|key| parent_path_with(key, &self.syntax).is_none())
            .map(String::as_str)
            .collect()
    }

    fn entry(&self, path: &str) -> Option<(&str, &TreeNode)> {
        self.nodes
            .get_key_value(path)
            .map(|(key, node)| (key.as_str(), node))
    }
}
