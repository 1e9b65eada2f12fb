//! Fragment partitioning and tree grafting
//!
//! A separate translation tool emits one text stream holding several
//! kinds of planning content (initial-state preferences, add effects,
//! delete effects, and axioms) separated by `;;` marker lines. This
//! module splits that stream into labeled fragments ([fragments]) and
//! splices the parsed fragments into a domain or problem tree at fixed
//! structural paths ([hanger]).
//!
//! The fragment splitter works on in-memory text and the grafts work on
//! in-memory trees; reading and writing files stays at the process
//! boundary (the CLI).

pub mod fragments;
pub mod hanger;

pub use fragments::{partition_marker_output, Fragments};
pub use hanger::{graft_domain, graft_problem, GraftError};
