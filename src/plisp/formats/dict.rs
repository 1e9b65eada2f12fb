//! Nested dictionary rendering
//!
//! Collapses an expression tree into a JSON value that reads like a
//! configuration object:
//!
//!     leaf                     -> "name"
//!     (name x)                 -> {"name": "x"}
//!     (name a b c)             -> {"name": ["a", "b", "c"]}   (simple expr)
//!     (name (k1 ...) (k2 ...)) -> {"name": {"k1": ..., "k2": ...}}
//!
//! The synthetic root container becomes a JSON array of its children.
//! This view is lossy (argument grouping flattens); use the canonical
//! format when the output must parse back.

use crate::plisp::ast::{NodeId, Tree};
use serde_json::{json, Map, Value};

/// Convert `node` and its subtree to a JSON value.
pub fn to_dict_value(tree: &Tree, node: NodeId) -> Value {
    if tree.is_synthetic_root(node) {
        let items: Vec<Value> = tree
            .children(node)
            .iter()
            .map(|&child| to_dict_value(tree, child))
            .collect();
        return Value::Array(items);
    }

    let children = tree.children(node);
    let name = tree.name(node).to_string();

    if children.is_empty() {
        // a single name is a string
        Value::String(name)
    } else if children.len() == 1 {
        json!({ name: to_dict_value(tree, children[0]) })
    } else if tree.is_simple_expr(node) {
        let names: Vec<Value> = children
            .iter()
            .map(|&c| Value::String(tree.name(c).to_string()))
            .collect();
        json!({ name: Value::Array(names) })
    } else {
        let mut merged = Map::new();
        for &child in children {
            match to_dict_value(tree, child) {
                Value::Object(entries) => merged.extend(entries),
                // a stray leaf among expression children keeps its name
                // as a key with no value
                Value::String(leaf) => {
                    merged.insert(leaf, Value::Null);
                }
                other => {
                    merged.insert(tree.name(child).to_string(), other);
                }
            }
        }
        json!({ name: Value::Object(merged) })
    }
}

/// Pretty-printed JSON form of [to_dict_value].
pub fn to_json_str(tree: &Tree, node: NodeId) -> String {
    serde_json::to_string_pretty(&to_dict_value(tree, node)).expect("JSON value always serializes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plisp::parsing::parse_source;

    fn dict_of(source: &str) -> Value {
        let tree = parse_source(source).unwrap();
        to_dict_value(&tree, tree.sole_form().unwrap())
    }

    #[test]
    fn test_single_child_nests_directly() {
        assert_eq!(dict_of("(domain gripper)"), json!({"domain": "gripper"}));
    }

    #[test]
    fn test_simple_expr_becomes_list() {
        assert_eq!(
            dict_of("(:objects rooma roomb ball1)"),
            json!({":objects": ["rooma", "roomb", "ball1"]})
        );
    }

    #[test]
    fn test_nested_exprs_merge_into_object() {
        assert_eq!(
            dict_of("(define (domain gripper) (:requirements :strips))"),
            json!({"define": {"domain": "gripper", ":requirements": ":strips"}})
        );
    }

    #[test]
    fn test_root_container_is_array() {
        let tree = parse_source("(a 1) (b 2)").unwrap();
        let value = to_dict_value(&tree, tree.root());
        assert_eq!(value, json!([{"a": "1"}, {"b": "2"}]));
    }
}
