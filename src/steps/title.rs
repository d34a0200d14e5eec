//! Title classification and heading levels.

use std::collections::HashMap;

use super::{HighlightStyle, ProcessingStep};
use crate::dom::{Dom, heading_tag_level};
use crate::error::Result;
use crate::semantic::{ElementKind, KindSet, SemanticElement};

/// Turn headings and highlighted text into `Title` elements with a level.
///
/// `h1`..`h6` take their level from the tag. Highlighted text gets a level
/// from its highlight style: the first distinct style in the document is
/// level 1, the next new one level 2, and so on. Levels are assigned in
/// document order, composite inner elements included.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleClassifier;

impl TitleClassifier {
    pub const NAME: &'static str = "TitleClassifier";

    const CANDIDATES: KindSet = KindSet::of(&[ElementKind::Text, ElementKind::HighlightedText]);
}

impl ProcessingStep for TitleClassifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn process(&self, dom: &Dom, elements: Vec<SemanticElement>) -> Result<Vec<SemanticElement>> {
        let mut levels = StyleLevels::default();
        classify_all(dom, elements, &mut levels)
    }
}

/// Levels handed out to highlight styles, in order of first appearance.
#[derive(Default)]
struct StyleLevels {
    levels: HashMap<HighlightStyle, u8>,
}

impl StyleLevels {
    fn level_for(&mut self, style: HighlightStyle) -> u8 {
        let next = u8::try_from(self.levels.len() + 1).unwrap_or(u8::MAX);
        *self.levels.entry(style).or_insert(next)
    }
}

fn classify_all(
    dom: &Dom,
    elements: Vec<SemanticElement>,
    levels: &mut StyleLevels,
) -> Result<Vec<SemanticElement>> {
    elements
        .into_iter()
        .map(|element| classify_one(dom, element, levels))
        .collect()
}

fn classify_one(
    dom: &Dom,
    element: SemanticElement,
    levels: &mut StyleLevels,
) -> Result<SemanticElement> {
    if element.is(ElementKind::Composite) {
        let node = element.node();
        let inner = classify_all(dom, element.into_inner_elements(), levels)?;
        return SemanticElement::composite(node, inner);
    }

    if !element.is_any(TitleClassifier::CANDIDATES) {
        return Ok(element);
    }

    if let Some(level) = heading_tag_level(dom, element.node()) {
        return Ok(element.reclassified(ElementKind::Title).with_level(level));
    }

    if element.is(ElementKind::HighlightedText)
        && let Some(style) = HighlightStyle::of(dom, element.node())
    {
        let level = levels.level_for(style);
        return Ok(element.reclassified(ElementKind::Title).with_level(level));
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use crate::semantic::lift_elements;
    use crate::steps::{HighlightedTextClassifier, TextClassifier};

    fn classify(html: &str) -> (Dom, Vec<SemanticElement>) {
        let dom = parse_html(html);
        let mut elements = lift_elements(&dom);
        elements = TextClassifier::default().process(&dom, elements).unwrap();
        elements = HighlightedTextClassifier::default()
            .process(&dom, elements)
            .unwrap();
        elements = TitleClassifier.process(&dom, elements).unwrap();
        (dom, elements)
    }

    #[test]
    fn test_heading_tags_use_their_level() {
        let (_, elements) = classify("<h2>Overview</h2><p>body</p><h3>Detail</h3>");

        let summary: Vec<_> = elements.iter().map(|e| (e.kind(), e.level())).collect();
        assert_eq!(
            summary,
            vec![
                (ElementKind::Title, Some(2)),
                (ElementKind::Text, None),
                (ElementKind::Title, Some(3)),
            ]
        );
    }

    #[test]
    fn test_highlight_styles_get_levels_by_first_appearance() {
        let (dom, elements) = classify(
            "<p><b>PART I</b></p>
             <p><i>Item 1. Financial Statements</i></p>
             <p>Body text.</p>
             <p><b>PART II</b></p>
             <p><i>Item 1. Legal Proceedings</i></p>",
        );

        let summary: Vec<_> = elements
            .iter()
            .map(|e| (e.text(&dom), e.level()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("PART I".to_string(), Some(1)),
                ("Item 1. Financial Statements".to_string(), Some(2)),
                ("Body text.".to_string(), None),
                ("PART II".to_string(), Some(1)),
                ("Item 1. Legal Proceedings".to_string(), Some(2)),
            ]
        );
    }

    #[test]
    fn test_plain_text_stays_text() {
        let (_, elements) = classify("<p>Just text</p>");
        assert!(elements[0].is(ElementKind::Text));
        assert_eq!(elements[0].level(), None);
    }
}
