//! ASCII tree view
//!
//! One node per line, `|---` rails showing depth. A debugging view, not a
//! serialization: synthetic names are shown as-is.

use crate::plisp::ast::{NodeId, Tree};

/// Render `node` and its subtree as an indented ASCII tree.
pub fn to_treeviz_str(tree: &Tree, node: NodeId) -> String {
    let mut out = String::new();
    render(tree, node, 0, &mut out);
    out
}

fn render(tree: &Tree, node: NodeId, depth: usize, out: &mut String) {
    out.push_str(&"|---".repeat(depth));
    out.push_str(tree.name(node));
    out.push('\n');
    for &child in tree.children(node) {
        render(tree, child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plisp::parsing::parse_source;

    #[test]
    fn test_rails_follow_depth() {
        let tree = parse_source("(sum 1 (product 2 3))").unwrap();
        let sum = tree.sole_form().unwrap();
        let expected = "\
sum
|---1
|---product
|---|---2
|---|---3
";
        assert_eq!(to_treeviz_str(&tree, sum), expected);
    }

    #[test]
    fn test_root_container_is_shown() {
        let tree = parse_source("(a) (b)").unwrap();
        let expected = "root-elem\n|---a\n|---b\n";
        assert_eq!(to_treeviz_str(&tree, tree.root()), expected);
    }
}
