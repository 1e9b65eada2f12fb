//! Canonical planning-file rendering
//!
//! Serializes a tree back to the parenthesized text the parser consumes.
//! Layout is chosen per subtree: an expression whose arguments are all
//! atoms stays on one line, anything nested opens a multi-line block with
//! one level of indentation per tree depth. Given the same tree shape the
//! output is byte-identical, which is what makes round-trip testing
//! meaningful.
//!
//! The synthetic `eval` name is never written out; an anonymous call
//! renders as a bare paren pair around its children.

use crate::plisp::ast::{NodeId, Tree, EVAL_NAME};

const INDENT: &str = "    ";

/// Render `node` (and its subtree) as canonical text.
///
/// Rendering the synthetic `root-elem` container emits each top-level
/// expression on its own line with no enclosing parens.
pub fn to_canonical_str(tree: &Tree, node: NodeId) -> String {
    if tree.is_synthetic_root(node) {
        let forms: Vec<String> = tree
            .children(node)
            .iter()
            .map(|&child| render(tree, child, 0))
            .collect();
        return forms.join("\n");
    }
    render(tree, node, 0)
}

/// Name as it appears in output: the `eval` marker renders as nothing.
fn visible_name<'t>(tree: &'t Tree, node: NodeId) -> &'t str {
    let name = tree.name(node);
    if name == EVAL_NAME {
        ""
    } else {
        name
    }
}

fn render(tree: &Tree, node: NodeId, depth: usize) -> String {
    if !tree.is_call(node) {
        return tree.name(node).to_string();
    }

    let children = tree.children(node);
    if children.is_empty() {
        return format!("({})", visible_name(tree, node));
    }

    if children.iter().all(|&c| !tree.is_call(c)) {
        // one-liner: every argument is a bare atom
        let mut parts: Vec<&str> = Vec::with_capacity(children.len() + 1);
        let name = visible_name(tree, node);
        if !name.is_empty() {
            parts.push(name);
        }
        parts.extend(children.iter().map(|&c| tree.name(c)));
        return format!("({})", parts.join(" "));
    }

    // block layout: `(name` on its own line, children one level deeper,
    // closing paren aligned with the opener
    let spacing = INDENT.repeat(depth);
    let child_spacing = INDENT.repeat(depth + 1);
    let mut out = String::new();
    out.push('(');
    out.push_str(visible_name(tree, node));
    out.push('\n');
    for &child in children {
        out.push_str(&child_spacing);
        out.push_str(&render(tree, child, depth + 1));
        out.push('\n');
    }
    out.push_str(&spacing);
    out.push(')');
    out
}
