//! Format registry for tree serialization
//!
//! This module provides a pluggable registry for tree output formats.
//! Each format implements the `Formatter` trait and can be registered
//! with `FormatRegistry`; the CLI resolves `--format` names here.

use crate::plisp::ast::{NodeId, Tree};
use std::collections::HashMap;
use std::fmt;

use super::{to_canonical_str, to_json_str, to_treeviz_str};

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for tree formatters
///
/// Implementors provide a way to serialize a tree to a string
/// representation, starting at a given node.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "canonical", "treeviz")
    fn name(&self) -> &str;

    /// Serialize a subtree to this format
    fn serialize(&self, tree: &Tree, node: NodeId) -> String;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of tree formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be
    /// replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Serialize a subtree with the named format.
    pub fn serialize(&self, name: &str, tree: &Tree, node: NodeId) -> Result<String, FormatError> {
        let formatter = self
            .formatters
            .get(name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))?;
        Ok(formatter.serialize(tree, node))
    }

    /// Names and descriptions of all registered formats, sorted by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .formatters
            .values()
            .map(|f| (f.name(), f.description()))
            .collect();
        entries.sort();
        entries
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical planning-file text.
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn name(&self) -> &str {
        "canonical"
    }

    fn serialize(&self, tree: &Tree, node: NodeId) -> String {
        to_canonical_str(tree, node)
    }

    fn description(&self) -> &str {
        "Canonical parenthesized text (reparsable)"
    }
}

/// ASCII tree view.
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &Tree, node: NodeId) -> String {
        to_treeviz_str(tree, node)
    }

    fn description(&self) -> &str {
        "Indented ASCII tree for inspection"
    }
}

/// Nested dictionary as pretty JSON.
pub struct DictFormatter;

impl Formatter for DictFormatter {
    fn name(&self) -> &str {
        "dict"
    }

    fn serialize(&self, tree: &Tree, node: NodeId) -> String {
        to_json_str(tree, node)
    }

    fn description(&self) -> &str {
        "Nested dictionary rendered as JSON (lossy)"
    }
}

/// Registry with every built-in format registered.
pub fn default_registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(CanonicalFormatter);
    registry.register(TreevizFormatter);
    registry.register(DictFormatter);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plisp::parsing::parse_source;

    #[test]
    fn test_default_registry_resolves_names() {
        let registry = default_registry();
        let tree = parse_source("(sum 1 2)").unwrap();

        let canonical = registry
            .serialize("canonical", &tree, tree.root())
            .unwrap();
        assert_eq!(canonical, "(sum 1 2)");

        let names: Vec<&str> = registry.list().iter().map(|&(n, _)| n).collect();
        assert_eq!(names, vec!["canonical", "dict", "treeviz"]);
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let registry = default_registry();
        let tree = parse_source("(a)").unwrap();
        let err = registry.serialize("yaml", &tree, tree.root()).unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("yaml".to_string()));
    }
}
