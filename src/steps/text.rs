//! Plain text classification.

use super::ElementwiseStep;
use crate::dom::Dom;
use crate::semantic::{ElementKind, KindSet, SemanticElement};

/// Classify remaining elements that carry text as `Text`.
///
/// Elements that still contain a table are left unclassified: they were not
/// eligible for compositing (for example a table nested inside a composite's
/// child), and calling them text would hide the table.
#[derive(Debug, Clone, Copy)]
pub struct TextClassifier {
    types: KindSet,
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self {
            types: KindSet::single(ElementKind::NotYetClassified),
        }
    }
}

impl TextClassifier {
    pub fn with_types(types: KindSet) -> Self {
        Self { types }
    }
}

impl ElementwiseStep for TextClassifier {
    const NAME: &'static str = "TextClassifier";

    fn types_to_process(&self) -> KindSet {
        self.types
    }

    fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement {
        let node = element.node();
        if !element.text(dom).is_empty() && !dom.contains_tag(node, "table") {
            element.reclassified(ElementKind::Text)
        } else {
            element
        }
    }
}
