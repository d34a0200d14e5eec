//! Semantic tree: the classified elements arranged hierarchically.
//!
//! The flat element sequence is nested by DOM containment first and by
//! heading level second (see [`TreeBuilder`]). Rendering produces a
//! box-drawing outline meant for debugging and inspection.

mod builder;
mod render;

pub use builder::TreeBuilder;
pub use render::RenderOptions;

use crate::dom::Dom;
use crate::semantic::SemanticElement;

/// One element in the semantic tree and the nodes nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    element: SemanticElement,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(element: SemanticElement) -> Self {
        Self {
            element,
            children: Vec::new(),
        }
    }

    pub fn element(&self) -> &SemanticElement {
        &self.element
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Append a child, keeping insertion order.
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Pre-order traversal of this node and everything below it.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order iterator over tree nodes.
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// The forest of root nodes built from a classified document.
///
/// Borrows the DOM the elements point into, so rendering can read tag text.
#[derive(Debug, Clone)]
pub struct SemanticTree<'dom> {
    dom: &'dom Dom,
    roots: Vec<TreeNode>,
}

impl<'dom> SemanticTree<'dom> {
    pub fn new(dom: &'dom Dom, roots: Vec<TreeNode>) -> Self {
        Self { dom, roots }
    }

    pub fn dom(&self) -> &'dom Dom {
        self.dom
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Pre-order traversal across all roots.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
