//! Tree-level normalization of the planning grammar's mixed syntaxes
//!
//! Two rewrites, both destructive and both idempotent:
//!
//! - inline keywords: `:parameters (?a ?b)` puts the keyword and its
//!   argument group in adjacent sibling slots; the rewrite nests the
//!   group under the keyword so path queries see one shape.
//! - dash-typed lists: `sub1 sub2 - super` separates subtypes from their
//!   supertype with a bare dash; the rewrite groups them as
//!   `(super sub1 sub2)`.

use crate::plisp::ast::{path, NodeId, Tree, EVAL_NAME};

/// Keywords whose argument group follows as a sibling instead of nesting.
const INLINE_KEYWORDS: [&str; 3] = [":parameters", ":precondition", ":effect"];

/// Rewrite inline keyword syntax inside every `:action` of the tree.
///
/// After the rewrite the keyword is a call node: `:parameters` holds the
/// group's elements as leaves, `:precondition` and `:effect` hold the
/// following expression as their single child. Keywords that are already
/// call nodes (Lisp-syntax files) are left alone.
pub fn normalize_inline_keywords(tree: &mut Tree) {
    let base = tree.sole_form().unwrap_or_else(|| tree.root());
    let steps = path(&[":action"]);
    let actions: Vec<NodeId> = tree.seek_all(base, &steps).collect();

    for action in actions {
        for keyword in INLINE_KEYWORDS {
            rewrite_keyword(tree, action, keyword);
        }
    }
}

fn rewrite_keyword(tree: &mut Tree, action: NodeId, keyword: &str) {
    let children = tree.children(action);
    let Some(index) = children
        .iter()
        .position(|&c| tree.name(c) == keyword && !tree.is_call(c))
    else {
        return;
    };
    let keyword_node = children[index];
    let Some(&group) = children.get(index + 1) else {
        return;
    };

    tree.set_call(keyword_node);
    tree.detach(group);

    if keyword == ":parameters" {
        // flatten the group into bare parameter names
        if tree.name(group) != EVAL_NAME {
            let head = tree.new_leaf(tree.name(group).to_string());
            tree.add_child(keyword_node, head, None);
        }
        for child in tree.take_children(group) {
            tree.add_child(keyword_node, child, None);
        }
    } else {
        tree.add_child(keyword_node, group, None);
    }
}

/// Rewrite dash-typed lists under `node`, recursing into children when a
/// level has no dash.
///
/// `([:keyword]? s1.1 .. s1.n - super1 .. sm.1 .. sm.j - superm)`
/// becomes `([:keyword]? (super1 s1.1 .. s1.n) .. (superm sm.1 .. sm.j))`;
/// untyped trailing elements keep their position at the end.
pub fn coerce_typed_lists(tree: &mut Tree, node: NodeId) {
    let has_dash = tree.children(node).iter().any(|&c| tree.name(c) == "-");
    if !has_dash {
        let children: Vec<NodeId> = tree.children(node).to_vec();
        for child in children {
            coerce_typed_lists(tree, child);
        }
        return;
    }

    let items = tree.take_children(node);
    let mut group_start = 0;
    let mut i = 0;
    while i < items.len() {
        if tree.name(items[i]) == "-" && i + 1 < items.len() {
            let supertype = items[i + 1];
            tree.set_call(supertype);
            for &subtype in &items[group_start..i] {
                tree.add_child(supertype, subtype, None);
            }
            tree.add_child(node, supertype, None);
            group_start = i + 2;
            i += 2;
        } else {
            i += 1;
        }
    }
    for &leftover in &items[group_start..] {
        tree.add_child(node, leftover, None);
    }
}
