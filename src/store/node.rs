//! Nodes held by a [`NodeStore`](super::NodeStore).

use serde::Serialize;

/// Shape of the document value a node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A mapping; its entries are child nodes.
    Mapping,
    /// A sequence; its elements are child nodes keyed by index.
    Sequence,
    /// A leaf value with text.
    Scalar,
    /// A node known only by its path, e.g. from a path list.
    Marker,
}

/// A tree node keyed in the store by its full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Unescaped name of the last path component
    pub name: String,
    pub kind: NodeKind,
    /// Text of a scalar; `None` for containers and markers
    pub value: Option<String>,
}

impl TreeNode {
    pub fn mapping(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Mapping,
            value: None,
        }
    }

    pub fn sequence(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Sequence,
            value: None,
        }
    }

    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Scalar,
            value: Some(value.into()),
        }
    }

    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Marker,
            value: None,
        }
    }
}
