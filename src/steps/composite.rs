//! Composite element creation.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::ProcessingStep;
use crate::dom::{Dom, NodeId, contains_table, is_table_tag};
use crate::error::Result;
use crate::semantic::{ElementKind, SemanticElement};

/// Fuse containers that mix plain content with tables into one element.
///
/// Filings often put a caption paragraph, a table and a footnote inside one
/// `<div>`. Classifying the pieces separately would scatter the table away
/// from its text, so the container becomes a single composite whose inner
/// elements are its direct element children:
///
/// Before: `[Div > (Div > P, Table, Div > Table)]`
/// After:  `[Composite(Div) > (NotYetClassified(Div), NotYetClassified(Table), NotYetClassified(Div))]`
///
/// A container qualifies when it is still not-yet-classified, is not itself a
/// table, and at least one direct child is or contains a table. Only the
/// top level of the sequence is examined, so running the step again on its
/// own output creates nothing new.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeElementCreator;

impl CompositeElementCreator {
    pub const NAME: &'static str = "CompositeElementCreator";
}

impl ProcessingStep for CompositeElementCreator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn process(&self, dom: &Dom, elements: Vec<SemanticElement>) -> Result<Vec<SemanticElement>> {
        let eligible: HashSet<NodeId> = elements
            .iter()
            .filter(|e| is_eligible(dom, e))
            .map(SemanticElement::node)
            .collect();
        if eligible.is_empty() {
            return Ok(elements);
        }

        let parent_of = |node: NodeId| dom.get(node).map_or(NodeId::NONE, |n| n.parent);

        // A container that is a direct child of another eligible container
        // is absorbed as-is rather than composited itself.
        let composited: HashSet<NodeId> = eligible
            .iter()
            .copied()
            .filter(|&node| !eligible.contains(&parent_of(node)))
            .collect();

        // Elements already in the sequence for a container's children keep
        // their classification when they move inside the composite.
        let mut existing: HashMap<NodeId, SemanticElement> = HashMap::new();
        let mut kept = Vec::with_capacity(elements.len());
        for element in elements {
            if composited.contains(&parent_of(element.node())) {
                existing.insert(element.node(), element);
            } else {
                kept.push(element);
            }
        }

        kept.into_iter()
            .map(|element| {
                if !composited.contains(&element.node()) {
                    return Ok(element);
                }
                let node = element.node();
                let inner: Vec<SemanticElement> = dom
                    .element_children(node)
                    .map(|child| {
                        existing
                            .remove(&child)
                            .unwrap_or_else(|| SemanticElement::new(child))
                    })
                    .collect();
                trace!(?node, inner = inner.len(), "created composite element");
                SemanticElement::composite(node, inner)
            })
            .collect()
    }
}

fn is_eligible(dom: &Dom, element: &SemanticElement) -> bool {
    let node = element.node();
    element.is(ElementKind::NotYetClassified)
        && !is_table_tag(dom, node)
        && dom
            .element_children(node)
            .any(|child| contains_table(dom, child))
}
