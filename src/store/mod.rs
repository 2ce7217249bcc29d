//! Tree-node storage keyed by full path.
//!
//! This module provides [`NodeStore`], which locates parents and ancestors by
//! string lookup of derived parent paths, and loaders that build a store from
//! a YAML/JSON document or a list of paths.

pub mod loader;
pub mod node;
pub mod tree;

pub use node::{NodeKind, TreeNode};
pub use tree::NodeStore;
