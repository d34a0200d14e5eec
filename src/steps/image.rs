//! Image classification.

use super::ElementwiseStep;
use crate::dom::{Dom, is_image_tag};
use crate::semantic::{ElementKind, KindSet, SemanticElement};

/// Classify text-less elements that hold an image.
#[derive(Debug, Clone, Copy)]
pub struct ImageClassifier {
    types: KindSet,
}

impl Default for ImageClassifier {
    fn default() -> Self {
        Self {
            types: KindSet::single(ElementKind::NotYetClassified),
        }
    }
}

impl ImageClassifier {
    pub fn with_types(types: KindSet) -> Self {
        Self { types }
    }
}

impl ElementwiseStep for ImageClassifier {
    const NAME: &'static str = "ImageClassifier";

    fn types_to_process(&self) -> KindSet {
        self.types
    }

    fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement {
        let node = element.node();
        let has_image =
            is_image_tag(dom, node) || dom.descendants(node).any(|id| is_image_tag(dom, id));
        if has_image && element.text(dom).is_empty() && !dom.contains_tag(node, "table") {
            element.reclassified(ElementKind::Image)
        } else {
            element
        }
    }
}
