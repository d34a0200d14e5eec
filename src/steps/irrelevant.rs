//! Boilerplate detection: page numbers, page breaks and hidden nodes.

use super::ElementwiseStep;
use crate::dom::{Dom, InlineStyle};
use crate::semantic::{ElementKind, KindSet, SemanticElement};
use crate::util::collapse_whitespace;

/// Mark print-layout leftovers as irrelevant.
///
/// Filings converted from paginated documents keep their page furniture:
/// a `<hr>` or a `page-break-after` div between pages, and a centered page
/// number such as `12`, `- 12 -`, `Page 12 of 40`, `ii` or `F-3`.
#[derive(Debug, Clone, Copy)]
pub struct IrrelevantElementClassifier {
    types: KindSet,
}

impl Default for IrrelevantElementClassifier {
    fn default() -> Self {
        Self {
            types: KindSet::single(ElementKind::NotYetClassified),
        }
    }
}

impl IrrelevantElementClassifier {
    /// Classify elements of the given kinds instead of only not-yet-classified ones.
    pub fn with_types(types: KindSet) -> Self {
        Self { types }
    }
}

impl ElementwiseStep for IrrelevantElementClassifier {
    const NAME: &'static str = "IrrelevantElementClassifier";

    fn types_to_process(&self) -> KindSet {
        self.types
    }

    fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement {
        if is_irrelevant(dom, &element) {
            element.reclassified(ElementKind::Irrelevant)
        } else {
            element
        }
    }
}

fn is_irrelevant(dom: &Dom, element: &SemanticElement) -> bool {
    let node = element.node();
    let style = InlineStyle::of(dom, node);
    if style.hidden {
        return true;
    }

    let text = collapse_whitespace(&element.text(dom));
    if text.is_empty() {
        let is_rule = element.tag_name(dom) == Some("hr");
        let breaks_page = style.page_break
            || dom
                .descendants(node)
                .any(|id| dom.is_element(id) && InlineStyle::of(dom, id).page_break);
        let has_content = dom.contains_tag(node, "table") || dom.contains_tag(node, "img");
        return (is_rule || breaks_page) && !has_content;
    }

    !dom.contains_tag(node, "table") && is_page_number(&text)
}

/// Check if a line of text is a bare page number.
///
/// A plain number counts only up to three digits, and a plain roman numeral
/// only in lower case (`ii`, `xiv`), so that a year or a lone `I` used as a
/// column or section header is kept. Decorated forms (`- 2023 -`, `(IV)`,
/// `Page 1024`) allow four digits and either case.
pub(crate) fn is_page_number(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.chars().count() > 20 {
        return false;
    }

    // "- 12 -", "(12)", "[12]"
    let inner = text
        .trim_matches(|c: char| c == '-' || c == '\u{2013}' || c == '\u{2014}' || c.is_whitespace())
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']'])
        .trim();
    let mut decorated = inner.len() != text.len();

    // "Page 12", "Page 12 of 40"
    let lower = inner.to_ascii_lowercase();
    let number = match lower.strip_prefix("page") {
        Some(rest) => {
            decorated = true;
            let rest = rest.trim();
            match rest.split_once(" of ") {
                Some((page, total)) if is_arabic(total.trim(), 4) => page.trim(),
                _ => rest,
            }
        }
        None => inner,
    };

    if is_lettered(&number.to_ascii_lowercase()) {
        return true;
    }
    if decorated {
        is_arabic(number, 4) || is_roman(&number.to_ascii_lowercase())
    } else {
        is_arabic(number, 3) || is_roman(number)
    }
}

fn is_arabic(text: &str, max_digits: usize) -> bool {
    !text.is_empty() && text.len() <= max_digits && text.chars().all(|c| c.is_ascii_digit())
}

/// Lower-case roman numerals.
fn is_roman(text: &str) -> bool {
    !text.is_empty() && text.len() <= 6 && text.chars().all(|c| matches!(c, 'i' | 'v' | 'x' | 'l'))
}

/// Section-lettered pages such as "F-3" or "A-12" (already lowercased).
fn is_lettered(text: &str) -> bool {
    match text.split_once('-') {
        Some((prefix, number)) => {
            prefix.len() == 1
                && prefix.chars().all(|c| c.is_ascii_alphabetic())
                && is_arabic(number.trim(), 4)
        }
        None => false,
    }
}
