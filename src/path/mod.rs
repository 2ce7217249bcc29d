//! Dotted tree-node paths with escaped delimiters.
//!
//! A path such as `a.b\.c.d` names a node three levels deep: the components
//! are `a`, `b\.c` and `d`. An escape character binds to the one character
//! after it, so the escaped dot belongs to the middle component.
//!
//! # Operations
//!
//! - [`split`] - components of a path, escapes left in place
//! - [`parent_path`] - the path minus its last component
//! - [`join`] - inverse of `split`
//! - [`escape_component`] / [`unescape_component`] - raw names to components and back
//! - [`TreePath`] - owned, optionally validated path value
//!
//! Every operation has a `_with` variant (or takes a [`PathSyntax`]) for
//! other delimiter/escape pairs.

pub mod error;
pub mod escape;
pub mod parser;
pub mod syntax;
pub mod tree_path;

pub use error::PathError;
pub use escape::{escape_component, unescape_component};
pub use parser::{join, join_with, parent_path, parent_path_with, split, split_with};
pub use syntax::PathSyntax;
pub use tree_path::{EmptyComponents, TreePath};
