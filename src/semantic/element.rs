//! Semantic element types and classification kinds.

use std::fmt;

use crate::dom::{Dom, NodeId};
use crate::error::{Error, Result};

/// Classification of a semantic element.
///
/// The set is closed: steps and the renderer dispatch on it with `match` or
/// with a [`KindSet`] membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// No step has recognized the element (yet).
    NotYetClassified,
    /// Boilerplate such as page numbers and page breaks.
    Irrelevant,
    /// No visible text and nothing to show.
    Empty,
    /// An image.
    Image,
    /// A `<table>`.
    Table,
    /// Ordinary running text.
    Text,
    /// Text that is entirely bold, italic or underlined.
    HighlightedText,
    /// A heading. Always carries a level.
    Title,
    /// A container that absorbed its mixed text/table children.
    Composite,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 9] = [
        ElementKind::NotYetClassified,
        ElementKind::Irrelevant,
        ElementKind::Empty,
        ElementKind::Image,
        ElementKind::Table,
        ElementKind::Text,
        ElementKind::HighlightedText,
        ElementKind::Title,
        ElementKind::Composite,
    ];

    /// Display name used by the tree renderer.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::NotYetClassified => "NotYetClassifiedElement",
            ElementKind::Irrelevant => "IrrelevantElement",
            ElementKind::Empty => "EmptyElement",
            ElementKind::Image => "ImageElement",
            ElementKind::Table => "TableElement",
            ElementKind::Text => "TextElement",
            ElementKind::HighlightedText => "HighlightedTextElement",
            ElementKind::Title => "TitleElement",
            ElementKind::Composite => "CompositeSemanticElement",
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`ElementKind`]s, used for "is one of" checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u16);

impl KindSet {
    /// The empty set.
    pub const EMPTY: KindSet = KindSet(0);

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[ElementKind]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        KindSet(bits)
    }

    /// A set holding exactly one kind.
    pub const fn single(kind: ElementKind) -> Self {
        KindSet(kind.bit())
    }

    pub const fn contains(self, kind: ElementKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Return a copy of the set with `kind` added.
    pub const fn with(self, kind: ElementKind) -> Self {
        KindSet(self.0 | kind.bit())
    }

    /// Return a copy of the set with `kind` removed.
    pub const fn without(self, kind: ElementKind) -> Self {
        KindSet(self.0 & !kind.bit())
    }

    pub fn insert(&mut self, kind: ElementKind) {
        self.0 |= kind.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the kinds in the set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = ElementKind> {
        ElementKind::ALL.into_iter().filter(move |&k| self.contains(k))
    }
}

impl FromIterator<ElementKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = ElementKind>>(iter: I) -> Self {
        let mut set = KindSet::EMPTY;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl From<ElementKind> for KindSet {
    fn from(kind: ElementKind) -> Self {
        KindSet::single(kind)
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// One DOM node plus its classification.
///
/// Elements are values: steps consume them and hand back new ones instead of
/// mutating shared objects. A `Composite` element exclusively owns its inner
/// elements, which never appear in the flat sequence next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticElement {
    node: NodeId,
    kind: ElementKind,
    level: Option<u8>,
    inner: Vec<SemanticElement>,
}

impl SemanticElement {
    /// Wrap a node as a not-yet-classified element.
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            kind: ElementKind::NotYetClassified,
            level: None,
            inner: Vec::new(),
        }
    }

    /// Create a composite element owning `inner`, in document order.
    ///
    /// Fails with [`Error::EmptyComposite`] when `inner` is empty.
    pub fn composite(node: NodeId, inner: Vec<SemanticElement>) -> Result<Self> {
        if inner.is_empty() {
            return Err(Error::EmptyComposite { node });
        }
        Ok(Self {
            node,
            kind: ElementKind::Composite,
            level: None,
            inner,
        })
    }

    /// Return this element with a new classification.
    ///
    /// Any heading level is cleared, and inner elements are kept only when
    /// the element stays a composite. Composites are built with
    /// [`SemanticElement::composite`]; reclassifying a plain element as
    /// `Composite` leaves it unchanged.
    pub fn reclassified(mut self, kind: ElementKind) -> Self {
        if kind == ElementKind::Composite && self.inner.is_empty() {
            return self;
        }
        if kind != ElementKind::Composite {
            self.inner.clear();
        }
        self.kind = kind;
        self.level = None;
        self
    }

    /// Return this element with a heading level attached.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Heading level, present only on heading-like elements.
    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// Inner elements of a composite; empty for every other kind.
    pub fn inner_elements(&self) -> &[SemanticElement] {
        &self.inner
    }

    /// Take the inner elements out of a composite.
    pub fn into_inner_elements(self) -> Vec<SemanticElement> {
        self.inner
    }

    pub fn is(&self, kind: ElementKind) -> bool {
        self.kind == kind
    }

    pub fn is_any(&self, kinds: KindSet) -> bool {
        kinds.contains(self.kind)
    }

    /// Display name of the element's kind.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Tag name of the wrapped node.
    pub fn tag_name<'d>(&self, dom: &'d Dom) -> Option<&'d str> {
        dom.tag_name(self.node)
    }

    /// Trimmed visible text of the wrapped node.
    pub fn text(&self, dom: &Dom) -> String {
        dom.trimmed_text(self.node)
    }

    /// One-line description: kind, optional level, tag and text.
    pub fn describe(&self, dom: &Dom) -> String {
        let mut out = self.name().to_string();
        if let Some(level) = self.level {
            out.push_str(&format!("[L{level}]"));
        }
        if let Some(tag) = self.tag_name(dom) {
            out.push_str(&format!(" <{tag}>"));
        }
        let text = crate::util::collapse_whitespace(&self.text(dom));
        if !text.is_empty() {
            out.push_str(": ");
            out.push_str(&text);
        }
        out
    }
}

/// Replace every composite with its inner elements, recursively.
pub fn unwrap_composites(elements: Vec<SemanticElement>) -> Vec<SemanticElement> {
    let mut out = Vec::with_capacity(elements.len());
    let mut stack: Vec<SemanticElement> = elements.into_iter().rev().collect();
    while let Some(element) = stack.pop() {
        if element.is(ElementKind::Composite) {
            stack.extend(element.into_inner_elements().into_iter().rev());
        } else {
            out.push(element);
        }
    }
    out
}
