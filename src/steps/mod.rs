//! Processing steps: `Vec<SemanticElement>` in, `Vec<SemanticElement>` out.
//!
//! ## Default order
//!
//! 1. **Irrelevant** - page numbers, page breaks, hidden nodes
//! 2. **Image** - text-less image holders
//! 3. **Empty** - nothing visible at all
//! 4. **Composite** - fuse containers that mix text and tables
//! 5. **Table** - `<table>` elements
//! 6. **Text** - whatever still carries text
//! 7. **Highlighted text** - text that is entirely bold, italic or underlined
//! 8. **Title** - headings and highlighted text get a heading level
//!
//! Boilerplate is claimed first so it never ends up inside a composite's
//! text, and composites are formed before the leaf classifiers run so those
//! classifiers see (and classify) the composite's inner elements.

mod composite;
mod empty;
mod highlight;
mod image;
mod irrelevant;
mod table;
mod text;
mod title;

pub use composite::CompositeElementCreator;
pub use empty::EmptyElementClassifier;
pub use highlight::{HighlightStyle, HighlightedTextClassifier};
pub use image::ImageClassifier;
pub use irrelevant::IrrelevantElementClassifier;
pub use table::TableClassifier;
pub use text::TextClassifier;
pub use title::TitleClassifier;

use crate::dom::Dom;
use crate::error::Result;
use crate::semantic::{ElementKind, KindSet, SemanticElement};

/// One stage of the pipeline.
///
/// A step sees the complete current flat sequence and returns the next one.
/// It may reclassify, replace, merge or drop elements, and must keep the
/// relative document order of everything it leaves alone. Steps keep no
/// state between calls.
pub trait ProcessingStep: Send + Sync {
    /// Name used in logs and for selecting steps.
    fn name(&self) -> &'static str;

    fn process(&self, dom: &Dom, elements: Vec<SemanticElement>) -> Result<Vec<SemanticElement>>;
}

/// A step that classifies elements one at a time.
///
/// Only elements whose kind is in [`ElementwiseStep::types_to_process`] are
/// handed to [`ElementwiseStep::classify`]; everything else passes through.
/// Composite elements are descended into, so their inner elements are
/// classified as well.
pub trait ElementwiseStep: Send + Sync {
    const NAME: &'static str;

    fn types_to_process(&self) -> KindSet {
        KindSet::single(ElementKind::NotYetClassified)
    }

    fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement;
}

impl<T: ElementwiseStep> ProcessingStep for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn process(&self, dom: &Dom, elements: Vec<SemanticElement>) -> Result<Vec<SemanticElement>> {
        classify_all(self, dom, elements)
    }
}

fn classify_all<S: ElementwiseStep>(
    step: &S,
    dom: &Dom,
    elements: Vec<SemanticElement>,
) -> Result<Vec<SemanticElement>> {
    elements
        .into_iter()
        .map(|element| classify_one(step, dom, element))
        .collect()
}

fn classify_one<S: ElementwiseStep>(
    step: &S,
    dom: &Dom,
    element: SemanticElement,
) -> Result<SemanticElement> {
    let element = if element.is_any(step.types_to_process()) {
        step.classify(dom, element)
    } else {
        element
    };

    if element.is(ElementKind::Composite) {
        let node = element.node();
        let inner = classify_all(step, dom, element.into_inner_elements())?;
        return SemanticElement::composite(node, inner);
    }

    Ok(element)
}

/// The built-in steps, in the order the pipeline runs them.
pub fn default_steps() -> Vec<Box<dyn ProcessingStep>> {
    vec![
        Box::new(IrrelevantElementClassifier::default()),
        Box::new(ImageClassifier::default()),
        Box::new(EmptyElementClassifier::default()),
        Box::new(CompositeElementCreator),
        Box::new(TableClassifier::default()),
        Box::new(TextClassifier::default()),
        Box::new(HighlightedTextClassifier::default()),
        Box::new(TitleClassifier),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use crate::semantic::lift_elements;

    struct MarkTables;

    impl ElementwiseStep for MarkTables {
        const NAME: &'static str = "MarkTables";

        fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement {
            if element.tag_name(dom) == Some("table") {
                element.reclassified(ElementKind::Table)
            } else {
                element
            }
        }
    }

    #[test]
    fn test_elementwise_step_descends_into_composites() {
        let dom = parse_html("<div><p>a</p><table><tr><td>1</td></tr></table></div><table></table>");
        let elements = lift_elements(&dom);
        let elements = CompositeElementCreator.process(&dom, elements).unwrap();

        let elements = MarkTables.process(&dom, elements).unwrap();

        assert_eq!(elements.len(), 2);
        assert!(elements[0].is(ElementKind::Composite));
        let inner: Vec<_> = elements[0].inner_elements().iter().map(|e| e.kind()).collect();
        assert_eq!(inner, vec![ElementKind::NotYetClassified, ElementKind::Table]);
        assert!(elements[1].is(ElementKind::Table));
    }

    #[test]
    fn test_default_step_names_are_unique_and_ordered() {
        let names: Vec<_> = default_steps().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "IrrelevantElementClassifier",
                "ImageClassifier",
                "EmptyElementClassifier",
                "CompositeElementCreator",
                "TableClassifier",
                "TextClassifier",
                "HighlightedTextClassifier",
                "TitleClassifier",
            ]
        );
    }
}
