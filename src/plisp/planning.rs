//! Planning-file queries
//!
//! Domain-specific views over the generic expression tree. Planning
//! files come in two kinds, a domain (predicates and actions) and a
//! problem (objects, initial state, goal), and both are plain trees; the
//! functions here are free functions over the tree rather than node
//! subclasses, so the tree type stays dumb data.
//!
//! The planning grammar mixes two syntaxes inside action bodies:
//!
//!     Lisp syntax      (:predicates (room ?r) ...)
//!     inline syntax    :parameters (?from ?to)
//!
//! The inline form puts the keyword and its argument group in two
//! adjacent sibling positions. [normalize::normalize_inline_keywords]
//! rewrites that into nested form at the tree level so the accessors can
//! use ordinary path queries. Typed lists use a third, dash-separated
//! shape that [normalize::coerce_typed_lists] rewrites into groups.

pub mod normalize;
pub mod queries;

pub use normalize::{coerce_typed_lists, normalize_inline_keywords};
pub use queries::{
    action_name, actions, classify, domain_name, effects, goal, init_state, objects,
    parameters, preconditions, predicates, problem_name, FileKind,
};

use crate::plisp::ast::Tree;
use crate::plisp::parsing::{parse_source, ParseError};

/// Parse a planning file and normalize its action bodies.
///
/// The accessors in [queries] assume normalized trees; this is the entry
/// point that guarantees it.
pub fn parse_planning_source(source: &str) -> Result<Tree, ParseError> {
    let mut tree = parse_source(source)?;
    normalize_inline_keywords(&mut tree);
    Ok(tree)
}
