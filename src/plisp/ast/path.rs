//! Path queries over the expression tree
//!
//! A path is an ordered list of selectors walked from a starting node,
//! one tree level per step. Sibling lists in planning files routinely
//! repeat names (several `:action` blocks, several `eval` groups), so a
//! step can carry an occurrence index to pick the nth same-named child at
//! that level. Occurrence indices are zero-based and count same-named
//! siblings only, never global positions. Negative indices do not exist
//! here; the index type rules them out.
//!
//! A failed lookup is an ordinary `None`, not an error: callers are
//! expected to branch on presence.

use super::tree::{NodeId, Tree};

/// One step of a query path: a child name, optionally narrowed to the
/// nth same-named sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// Matches any child with this name, in order.
    Name(String),
    /// Matches only the nth child with this name among its same-named
    /// siblings.
    Nth(String, usize),
}

impl PathStep {
    fn name(&self) -> &str {
        match self {
            PathStep::Name(name) => name,
            PathStep::Nth(name, _) => name,
        }
    }
}

impl From<&str> for PathStep {
    fn from(name: &str) -> Self {
        PathStep::Name(name.to_string())
    }
}

impl From<(&str, usize)> for PathStep {
    fn from((name, index): (&str, usize)) -> Self {
        PathStep::Nth(name.to_string(), index)
    }
}

/// Build a path from `&str` / `(&str, usize)` step literals.
///
/// `path(&["defdomain", "eval"])` is the common form; mixed paths go
/// through `PathStep::from` directly.
pub fn path(steps: &[&str]) -> Vec<PathStep> {
    steps.iter().map(|&s| PathStep::from(s)).collect()
}

impl Tree {
    /// Depth-first search for the first node matching the full path.
    ///
    /// A `Name` step tries each matching child in order and recurses into
    /// the first one that completes the rest of the path. An `Nth` step
    /// narrows to the nth same-named child before recursing; if that
    /// subtree does not complete the path, the lookup misses.
    ///
    /// The empty path matches the starting node itself.
    pub fn seek(&self, from: NodeId, steps: &[PathStep]) -> Option<NodeId> {
        let Some((step, rest)) = steps.split_first() else {
            return Some(from);
        };

        match step {
            PathStep::Name(name) => {
                for &child in self.children(from) {
                    if self.name(child) == name {
                        if let Some(found) = self.seek(child, rest) {
                            return Some(found);
                        }
                    }
                }
                None
            }
            PathStep::Nth(name, index) => {
                let mut seen = 0;
                for &child in self.children(from) {
                    if self.name(child) == name {
                        if seen == *index {
                            return self.seek(child, rest);
                        }
                        seen += 1;
                    }
                }
                None
            }
        }
    }

    /// Lazy iterator over every node matching the full path, in
    /// depth-first order.
    ///
    /// Each call starts a fresh traversal. The per-level matching rule is
    /// the same as [Tree::seek].
    pub fn seek_all<'t>(&'t self, from: NodeId, steps: &'t [PathStep]) -> SeekAll<'t> {
        SeekAll::new(self, from, steps)
    }

    /// Deletion-mode counterpart of [Tree::seek_all]: detaches every
    /// full-path match from its parent and returns them in match order.
    pub fn take_all(&mut self, from: NodeId, steps: &[PathStep]) -> Vec<NodeId> {
        let matches: Vec<NodeId> = self.seek_all(from, steps).collect();
        for &node in &matches {
            self.detach(node);
        }
        matches
    }
}

/// Iterator state for [Tree::seek_all].
pub struct SeekAll<'t> {
    tree: &'t Tree,
    steps: &'t [PathStep],
    stack: Vec<Frame>,
    /// Set when the path is empty, in which case the start node itself is
    /// the single match.
    yield_start: Option<NodeId>,
}

/// One level of the traversal: scanning `node`'s children against
/// `steps[depth]`.
struct Frame {
    node: NodeId,
    depth: usize,
    next_child: usize,
    same_name_seen: usize,
}

impl<'t> SeekAll<'t> {
    fn new(tree: &'t Tree, from: NodeId, steps: &'t [PathStep]) -> Self {
        if steps.is_empty() {
            SeekAll {
                tree,
                steps,
                stack: Vec::new(),
                yield_start: Some(from),
            }
        } else {
            SeekAll {
                tree,
                steps,
                stack: vec![Frame {
                    node: from,
                    depth: 0,
                    next_child: 0,
                    same_name_seen: 0,
                }],
                yield_start: None,
            }
        }
    }
}

impl Iterator for SeekAll<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if let Some(start) = self.yield_start.take() {
            return Some(start);
        }

        loop {
            let frame = self.stack.last_mut()?;
            let children = self.tree.children(frame.node);
            if frame.next_child >= children.len() {
                self.stack.pop();
                continue;
            }
            let child = children[frame.next_child];
            frame.next_child += 1;

            let step = &self.steps[frame.depth];
            let matched = if self.tree.name(child) == step.name() {
                match step {
                    PathStep::Name(_) => true,
                    PathStep::Nth(_, index) => {
                        let hit = frame.same_name_seen == *index;
                        frame.same_name_seen += 1;
                        hit
                    }
                }
            } else {
                false
            };
            if !matched {
                continue;
            }

            let depth = frame.depth;
            if depth + 1 == self.steps.len() {
                return Some(child);
            }
            self.stack.push(Frame {
                node: child,
                depth: depth + 1,
                next_child: 0,
                same_name_seen: 0,
            });
        }
    }
}
