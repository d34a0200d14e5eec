//! Highlighted text classification.

use super::ElementwiseStep;
use crate::dom::{Dom, InlineStyle, NodeId};
use crate::semantic::{ElementKind, KindSet, SemanticElement};

/// How a run of text is emphasized.
///
/// Two titles with the same highlight style are assumed to sit at the same
/// depth of the document outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HighlightStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl HighlightStyle {
    /// Check if any emphasis is present.
    pub fn is_highlighted(self) -> bool {
        self.bold || self.italic || self.underline
    }

    fn intersect(self, other: HighlightStyle) -> HighlightStyle {
        HighlightStyle {
            bold: self.bold && other.bold,
            italic: self.italic && other.italic,
            underline: self.underline && other.underline,
        }
    }

    /// Emphasis shared by every visible text run under `root`.
    ///
    /// Returns `None` when there is no visible text or nothing is shared.
    pub fn of(dom: &Dom, root: NodeId) -> Option<HighlightStyle> {
        let mut shared: Option<HighlightStyle> = None;
        for id in dom.descendants(root) {
            let Some(text) = dom.text_content(id) else {
                continue;
            };
            if text.trim().is_empty() {
                continue;
            }
            let Some(style) = text_run_style(dom, id, root) else {
                continue;
            };
            shared = Some(match shared {
                Some(acc) => acc.intersect(style),
                None => style,
            });
        }
        shared.filter(|s| s.is_highlighted())
    }
}

/// Resolve the emphasis of one text node by walking up to `root`.
///
/// The nearest ancestor that says anything about a property wins, so
/// `<b><span style="font-weight:normal">x</span></b>` is not bold. Returns
/// `None` for text inside non-rendered elements.
fn text_run_style(dom: &Dom, text: NodeId, root: NodeId) -> Option<HighlightStyle> {
    let mut bold = None;
    let mut italic = None;
    let mut underline = None;

    let mut current = dom.get(text)?.parent;
    while current.is_some() {
        let tag = dom.tag_name(current);
        if matches!(tag, Some("script" | "style")) {
            return None;
        }

        let style = InlineStyle::of(dom, current);
        if bold.is_none() {
            bold = match tag {
                _ if style.font_weight.is_some() => Some(style.is_bold()),
                Some("b" | "strong") => Some(true),
                _ => None,
            };
        }
        if italic.is_none() {
            italic = style.italic.or(match tag {
                Some("i" | "em") => Some(true),
                _ => None,
            });
        }
        if underline.is_none() {
            underline = style.underline.or(match tag {
                Some("u" | "ins") => Some(true),
                _ => None,
            });
        }

        if current == root {
            break;
        }
        current = dom.get(current).map_or(NodeId::NONE, |n| n.parent);
    }

    Some(HighlightStyle {
        bold: bold.unwrap_or(false),
        italic: italic.unwrap_or(false),
        underline: underline.unwrap_or(false),
    })
}

/// Classify text that is entirely emphasized as `HighlightedText`.
#[derive(Debug, Clone, Copy)]
pub struct HighlightedTextClassifier {
    types: KindSet,
}

impl Default for HighlightedTextClassifier {
    fn default() -> Self {
        Self {
            types: KindSet::single(ElementKind::Text),
        }
    }
}

impl HighlightedTextClassifier {
    pub fn with_types(types: KindSet) -> Self {
        Self { types }
    }
}

impl ElementwiseStep for HighlightedTextClassifier {
    const NAME: &'static str = "HighlightedTextClassifier";

    fn types_to_process(&self) -> KindSet {
        self.types
    }

    fn classify(&self, dom: &Dom, element: SemanticElement) -> SemanticElement {
        if HighlightStyle::of(dom, element.node()).is_some() {
            element.reclassified(ElementKind::HighlightedText)
        } else {
            element
        }
    }
}
