//! Empty element classification.

use super::ElementwiseStep;
use crate::dom::Dom;
use crate::semantic::{ElementKind, KindSet, SemanticElement};

/// Classify elements with no visible text and no table or image.
#[derive(Debug, Clone, Copy)]
pub struct EmptyElementClassifier {
    types: KindSet,
}

impl Default for EmptyElementClassifier {
    fn default() -> Self {
        Self {
            types: KindSet::single(ElementKind::NotYetClassified),
        }
    }
}

impl EmptyElementClassifier {
    pub fn with_types(types: KindSet) -> Self {
        Self { types }
    }
}

impl ElementwiseStep for EmptyElementClassifier {
    const NAME: &'static str = "EmptyElementClassifier";

    fn types_to_process(&self) -> KindSet {
        self.types
    }

    fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement {
        let node = element.node();
        let is_empty = element.text(dom).is_empty()
            && !matches!(element.tag_name(dom), Some("table" | "img"))
            && !dom.contains_tag(node, "table")
            && !dom.contains_tag(node, "img");
        if is_empty {
            element.reclassified(ElementKind::Empty)
        } else {
            element
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use crate::semantic::lift_elements;
    use crate::steps::ProcessingStep;

    #[test]
    fn test_empty_elements() {
        let dom = parse_html(
            "<p> </p><div><br></div><p>&nbsp;</p><p>text</p><table></table><div><img src=x></div>",
        );

        let kinds: Vec<_> = EmptyElementClassifier::default()
            .process(&dom, lift_elements(&dom))
            .unwrap()
            .iter()
            .map(SemanticElement::kind)
            .collect();

        assert_eq!(
            kinds,
            vec![
                ElementKind::Empty,
                ElementKind::Empty,
                ElementKind::Empty,
                ElementKind::NotYetClassified,
                ElementKind::NotYetClassified,
                ElementKind::NotYetClassified,
            ]
        );
    }
}
