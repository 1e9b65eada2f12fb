//! Grafting fragments onto planning trees
//!
//! The splice points are fixed by the shape SHOP-style planning files
//! take:
//!
//!     problem file    (defproblem name domain (init...) (goal...))
//!     domain file     (defdomain name ((:operator ...) (:- ...) ...))
//!
//! Anonymous `eval` groups are addressed by occurrence index, which is
//! why the path layer supports indexed selectors at all.

use std::fmt;

use crate::plisp::ast::{path, PathStep, Tree};

/// A graft could not find its splice point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraftError {
    /// The named anchor path was absent from the target tree.
    MissingAnchor(String),
}

impl GraftError {
    fn anchor(name: &str) -> Self {
        GraftError::MissingAnchor(name.to_string())
    }
}

impl fmt::Display for GraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraftError::MissingAnchor(name) => {
                write!(f, "graft anchor '{name}' not found in target tree")
            }
        }
    }
}

impl std::error::Error for GraftError {}

/// The metric functions grafted into a problem file, in insertion order.
const METRIC_FUNCTIONS: [&str; 3] = ["metric", "pessimistic-metric", "optimistic-metric"];

/// Graft translator fragments onto a problem tree.
///
/// The initial-state preference tree is merged under the problem's first
/// anonymous group (`defproblem → (eval, 0)`); the three metric `defun`s
/// from the axioms tree are inserted right after the `bestMetric` defun,
/// keeping their order.
pub fn graft_problem(
    problem: &mut Tree,
    init_prefs: &Tree,
    axioms: &Tree,
) -> Result<(), GraftError> {
    let root = problem.root();

    let steps = [PathStep::from("defproblem"), PathStep::from(("eval", 0))];
    let init_anchor = problem
        .seek(root, &steps)
        .ok_or_else(|| GraftError::anchor("defproblem eval"))?;
    problem.merge_subtree(init_anchor, init_prefs);

    let best_metric = problem
        .seek(root, &path(&["defun", "bestMetric"]))
        .ok_or_else(|| GraftError::anchor("defun bestMetric"))?;
    let best_metric_defun = problem
        .parent(best_metric)
        .ok_or_else(|| GraftError::anchor("defun bestMetric"))?;
    let insert_at = problem
        .index_of(root, best_metric_defun)
        .ok_or_else(|| GraftError::anchor("defun bestMetric"))?;

    for (offset, function) in METRIC_FUNCTIONS.into_iter().enumerate() {
        let found = axioms
            .seek(axioms.root(), &path(&["defun", function]))
            .ok_or_else(|| GraftError::anchor(function))?;
        let defun = axioms
            .parent(found)
            .ok_or_else(|| GraftError::anchor(function))?;
        let copy = problem.copy_subtree_from(axioms, defun);
        problem.add_child(root, copy, Some(insert_at + offset));
    }

    Ok(())
}

/// Graft translator fragments onto a domain tree.
///
/// Every operator of the domain (`defdomain → eval → :operator`) gets
/// the delete-effects tree merged under its second anonymous group and
/// the add-effects tree under its third; every `:-` axiom subtree is
/// attached under the domain body.
pub fn graft_domain(
    domain: &mut Tree,
    add_effects: &Tree,
    del_effects: &Tree,
    axioms: &Tree,
) -> Result<(), GraftError> {
    let root = domain.root();

    let operator_steps = path(&["defdomain", "eval", ":operator"]);
    let operators: Vec<_> = domain.seek_all(root, &operator_steps).collect();
    if operators.is_empty() {
        return Err(GraftError::anchor("defdomain eval :operator"));
    }

    for operator in operators {
        let del_anchor = domain
            .seek(operator, &[PathStep::from(("eval", 1))])
            .ok_or_else(|| GraftError::anchor(":operator eval 1"))?;
        domain.merge_subtree(del_anchor, del_effects);

        let add_anchor = domain
            .seek(operator, &[PathStep::from(("eval", 2))])
            .ok_or_else(|| GraftError::anchor(":operator eval 2"))?;
        domain.merge_subtree(add_anchor, add_effects);
    }

    let body = domain
        .seek(root, &path(&["defdomain", "eval"]))
        .ok_or_else(|| GraftError::anchor("defdomain eval"))?;
    let axiom_steps = path(&[":-"]);
    let axiom_nodes: Vec<_> = axioms.seek_all(axioms.root(), &axiom_steps).collect();
    for axiom in axiom_nodes {
        // attach one by one; these have no container root to merge
        let copy = domain.copy_subtree_from(axioms, axiom);
        domain.add_child(body, copy, None);
    }

    Ok(())
}
