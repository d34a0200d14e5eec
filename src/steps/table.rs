//! Table classification.

use super::ElementwiseStep;
use crate::dom::{Dom, is_table_tag};
use crate::semantic::{ElementKind, KindSet, SemanticElement};

/// Classify `<table>` elements.
///
/// Containers that merely hold a table were turned into composites earlier;
/// this step sees the table itself, at the top level or inside a composite.
#[derive(Debug, Clone, Copy)]
pub struct TableClassifier {
    types: KindSet,
}

impl Default for TableClassifier {
    fn default() -> Self {
        Self {
            types: KindSet::single(ElementKind::NotYetClassified),
        }
    }
}

impl TableClassifier {
    pub fn with_types(types: KindSet) -> Self {
        Self { types }
    }
}

impl ElementwiseStep for TableClassifier {
    const NAME: &'static str = "TableClassifier";

    fn types_to_process(&self) -> KindSet {
        self.types
    }

    fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement {
        if is_table_tag(dom, element.node()) {
            element.reclassified(ElementKind::Table)
        } else {
            element
        }
    }
}
