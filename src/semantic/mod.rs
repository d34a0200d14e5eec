//! Semantic elements: classified wrappers around DOM nodes.

mod element;

pub use element::{ElementKind, KindSet, SemanticElement, unwrap_composites};

use crate::dom::Dom;

/// Lift the top level of a document into not-yet-classified elements.
///
/// The element children of the content root (usually `<body>`) become the
/// initial flat sequence, in document order. Text, comments and anything
/// deeper are reached later through each element's own node.
pub fn lift_elements(dom: &Dom) -> Vec<SemanticElement> {
    dom.element_children(dom.content_root())
        .map(SemanticElement::new)
        .collect()
}
