//! nodepath - dotted tree-node paths with escaped delimiters.
//!
//! The [`path`] module holds the parser (`split`, `parent_path`, `join`) and
//! the owned [`path::TreePath`] value. The [`store`] module keys tree nodes by
//! their full path and walks ancestors through the parser. [`config`] carries
//! the user-facing settings for the `nodepath` binary.

pub mod config;
pub mod path;
pub mod store;
