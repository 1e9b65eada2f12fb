//! Classification and named-substructure accessors
//!
//! Every accessor returns `Option`: planning files in the wild omit
//! sections, and a missing section is an answer, not an error.

use crate::plisp::ast::{path, NodeId, Tree};

const ACTION_NAME: &str = ":action";

/// The two kinds of planning file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Domain,
    Problem,
}

/// The node accessors search from: the single top-level form when the
/// file has one, otherwise the root container.
fn base(tree: &Tree) -> NodeId {
    tree.sole_form().unwrap_or_else(|| tree.root())
}

/// Classify a parsed planning file.
///
/// A file declaring a `problem` form is a problem; everything else is a
/// domain. Computed fresh on each call; nothing is cached on the tree.
pub fn classify(tree: &Tree) -> FileKind {
    if tree.seek(base(tree), &path(&["problem"])).is_some() {
        FileKind::Problem
    } else {
        FileKind::Domain
    }
}

/// Name of the first child of the node at `steps`, if both exist.
fn named_child(tree: &Tree, steps: &[&str]) -> Option<NodeId> {
    let found = tree.seek(base(tree), &path(steps))?;
    tree.first_child(found)
}

/// The declared domain name.
///
/// Domain files declare it as `(domain name)`; problem files reference
/// it as `(:domain name)`.
pub fn domain_name(tree: &Tree) -> Option<&str> {
    let steps: &[&str] = match classify(tree) {
        FileKind::Domain => &["domain"],
        FileKind::Problem => &[":domain"],
    };
    named_child(tree, steps).map(|n| tree.name(n))
}

/// The declared problem name, for problem files.
pub fn problem_name(tree: &Tree) -> Option<&str> {
    if classify(tree) != FileKind::Problem {
        return None;
    }
    named_child(tree, &["problem"]).map(|n| tree.name(n))
}

/// Object names of a problem file.
pub fn objects(tree: &Tree) -> Option<Vec<&str>> {
    let found = tree.seek(base(tree), &path(&[":objects"]))?;
    Some(tree.children(found).iter().map(|&c| tree.name(c)).collect())
}

/// The initial-state subtree of a problem file.
pub fn init_state(tree: &Tree) -> Option<NodeId> {
    tree.seek(base(tree), &path(&[":init"]))
}

/// The goal subtree of a problem file.
pub fn goal(tree: &Tree) -> Option<NodeId> {
    tree.seek(base(tree), &path(&[":goal"]))
}

/// The predicates subtree of a domain file.
pub fn predicates(tree: &Tree) -> Option<NodeId> {
    tree.seek(base(tree), &path(&[":predicates"]))
}

/// All action subtrees of a domain file, in declaration order.
pub fn actions(tree: &Tree) -> Vec<NodeId> {
    let steps = path(&[ACTION_NAME]);
    tree.seek_all(base(tree), &steps).collect()
}

/// Name of an action (its first child).
pub fn action_name(tree: &Tree, action: NodeId) -> Option<&str> {
    if tree.name(action) != ACTION_NAME {
        return None;
    }
    tree.first_child(action).map(|n| tree.name(n))
}

/// Parameter names of an action. Assumes a normalized tree (see
/// [super::normalize]).
pub fn parameters(tree: &Tree, action: NodeId) -> Option<Vec<&str>> {
    let found = tree.seek(action, &path(&[":parameters"]))?;
    Some(tree.children(found).iter().map(|&c| tree.name(c)).collect())
}

/// The precondition subtree of an action. Assumes a normalized tree.
pub fn preconditions(tree: &Tree, action: NodeId) -> Option<NodeId> {
    tree.seek(action, &path(&[":precondition"]))
}

/// The effect subtree of an action. Assumes a normalized tree.
pub fn effects(tree: &Tree, action: NodeId) -> Option<NodeId> {
    tree.seek(action, &path(&[":effect"]))
}
