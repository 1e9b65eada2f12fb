//! Ordered expression tree
//!
//! The tree is the DOM-like structure every other part of the crate works
//! against: the parser builds one, the printers walk one, and the planning
//! and grafting layers query and splice one.
//!
//! Representation
//!
//!     Nodes live in a flat arena owned by [Tree]; a [NodeId] is an index
//!     into that arena and doubles as the node's identity. Parent links are
//!     plain back-reference indices, so the ownership graph stays a tree
//!     even though navigation can go both ways. Detached nodes remain in
//!     the arena but are unreachable from the root.
//!
//! Two sentinel names matter:
//!
//!     `root-elem` names the synthetic container that holds a file's
//!     top-level expressions (a file may contain more than one).
//!
//!     `eval` names the synthetic node the parser inserts for a
//!     parenthesized expression with no leading operator, as in
//!     `((lambda ...))` or the empty call `()`.
//!
//! Both sentinels are ordinary names as far as path queries are concerned;
//! grafting paths select `eval` nodes by name and occurrence index.

pub mod path;
pub mod tree;

pub use path::{path, PathStep, SeekAll};
pub use tree::{Neighbor, NodeId, Tree, EVAL_NAME, ROOT_NAME};
