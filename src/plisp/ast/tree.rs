//! Arena-backed ordered tree with parent links
//!
//! Children are kept in insertion order because argument order is
//! meaningful in the source grammar. All mutation goes through the methods
//! here so the parent/child links stay consistent.

use std::fmt;

/// Name of the synthetic container node that holds a file's top-level
/// expressions.
pub const ROOT_NAME: &str = "root-elem";

/// Name of the synthetic node standing in for a parenthesized expression
/// with no leading operator name.
pub const EVAL_NAME: &str = "eval";

/// Index-based identity of a node within its [Tree].
///
/// Distinct from the node's name, which may repeat across siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Result of a sibling lookup.
///
/// The root has no siblings at all, which is a different answer than
/// "there is no sibling on that side", so the two cases are kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// The node has no parent; sibling lookup does not apply.
    Root,
    /// The node sits at the boundary of its sibling list.
    None,
    Node(NodeId),
}

#[derive(Debug, Clone)]
struct NodeData {
    name: String,
    is_call: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An ordered tree of named nodes.
///
/// A node is either a call (a parenthesized expression, may have children)
/// or a leaf atom (never has children). The synthetic `root-elem`
/// container is the one non-call node allowed to hold children.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Tree {
    /// Create a tree holding only the synthetic `root-elem` container.
    pub fn new() -> Self {
        let mut tree = Tree {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.push_node(ROOT_NAME.to_string(), false);
        tree
    }

    /// Create a tree rooted at a real syntactic node instead of the
    /// synthetic container.
    pub fn with_root(name: impl Into<String>, is_call: bool) -> Self {
        let mut tree = Tree {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.push_node(name.into(), is_call);
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// True iff `id` is the synthetic `root-elem` container.
    pub fn is_synthetic_root(&self, id: NodeId) -> bool {
        id == self.root && !self.node(id).is_call && self.node(id).name == ROOT_NAME
    }

    /// The single top-level form, when the file holds exactly one.
    ///
    /// Planning files are a single `(define ...)` block, so callers use
    /// this to skip over the synthetic container.
    pub fn sole_form(&self) -> Option<NodeId> {
        if self.is_synthetic_root(self.root) && self.children(self.root).len() == 1 {
            Some(self.children(self.root)[0])
        } else {
            None
        }
    }

    fn push_node(&mut self, name: String, is_call: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name,
            is_call,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    /// Create a detached call node.
    pub fn new_call(&mut self, name: impl Into<String>) -> NodeId {
        self.push_node(name.into(), true)
    }

    /// Create a detached leaf node.
    pub fn new_leaf(&mut self, name: impl Into<String>) -> NodeId {
        self.push_node(name.into(), false)
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn is_call(&self, id: NodeId) -> bool {
        self.node(id).is_call
    }

    /// Promote a leaf to a call node. Used by tree rewrites that turn a
    /// bare keyword atom into an expression head.
    pub fn set_call(&mut self, id: NodeId) {
        self.node_mut(id).is_call = true;
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).parent.is_none()
    }

    /// True iff no child has children of its own.
    ///
    /// `(sum 3 2 4)` is simple; `(sum 3 (sum 2 4))` is not.
    pub fn is_simple_expr(&self, id: NodeId) -> bool {
        self.children(id)
            .iter()
            .all(|&c| self.children(c).is_empty())
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// Position of `child` within `parent`'s child list.
    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }

    pub fn next_sibling(&self, id: NodeId) -> Neighbor {
        self.sibling(id, 1)
    }

    pub fn prev_sibling(&self, id: NodeId) -> Neighbor {
        self.sibling(id, -1)
    }

    fn sibling(&self, id: NodeId, step: isize) -> Neighbor {
        let Some(parent) = self.parent(id) else {
            return Neighbor::Root;
        };
        let index = self
            .index_of(parent, id)
            .expect("parent link points at a node that does not list this child");
        let target = index as isize + step;
        if target < 0 || target as usize >= self.children(parent).len() {
            Neighbor::None
        } else {
            Neighbor::Node(self.children(parent)[target as usize])
        }
    }

    /// True iff `id` sits strictly below `other`.
    pub fn is_descendant_of(&self, id: NodeId, other: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if node == other {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// True iff `other` sits strictly below `id`.
    pub fn is_ancestor_of(&self, id: NodeId, other: NodeId) -> bool {
        self.is_descendant_of(other, id)
    }

    /// Attach `child` under `parent`.
    ///
    /// Appends by default; with `after`, inserts immediately following
    /// that index in the child list. The child must currently be
    /// detached, and the parent must be able to hold children (a call
    /// node or the synthetic container).
    pub fn add_child(&mut self, parent: NodeId, child: NodeId, after: Option<usize>) {
        assert!(
            self.node(parent).is_call || self.is_synthetic_root(parent),
            "cannot attach children to the leaf atom '{}'",
            self.name(parent)
        );
        assert!(
            self.node(child).parent.is_none(),
            "node '{}' is already attached",
            self.name(child)
        );
        self.node_mut(child).parent = Some(parent);
        match after {
            Some(index) => self.node_mut(parent).children.insert(index + 1, child),
            None => self.node_mut(parent).children.push(child),
        }
    }

    /// Remove `id` from its parent's child list.
    ///
    /// The node and its subtree stay in the arena (they can be
    /// re-attached) but are no longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            let index = self
                .index_of(parent, id)
                .expect("parent link points at a node that does not list this child");
            self.node_mut(parent).children.remove(index);
            self.node_mut(id).parent = None;
        }
    }

    /// Detach and return all children of `id`, in order.
    pub fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children = std::mem::take(&mut self.node_mut(id).children);
        for &child in &children {
            self.node_mut(child).parent = None;
        }
        children
    }

    /// Deep-copy a subtree of `other` into this arena. Returns the local
    /// root of the copy, detached.
    pub fn copy_subtree_from(&mut self, other: &Tree, node: NodeId) -> NodeId {
        let copy = self.push_node(other.name(node).to_string(), other.is_call(node));
        for &child in other.children(node) {
            let child_copy = self.copy_subtree_from(other, child);
            self.add_child(copy, child_copy, None);
        }
        copy
    }

    /// Splice another tree under `dest`.
    ///
    /// If `other` is rooted at the synthetic container, its top-level
    /// expressions are attached one by one (flattening that level);
    /// otherwise the root itself becomes a single new child.
    pub fn merge_subtree(&mut self, dest: NodeId, other: &Tree) {
        let other_root = other.root();
        if other.is_synthetic_root(other_root) {
            for &child in other.children(other_root) {
                let copy = self.copy_subtree_from(other, child);
                self.add_child(dest, copy, None);
            }
        } else {
            let copy = self.copy_subtree_from(other, other_root);
            self.add_child(dest, copy, None);
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
