//! Nesting a flat element sequence into a semantic tree.

use tracing::warn;

use super::{SemanticTree, TreeNode};
use crate::dom::Dom;
use crate::semantic::SemanticElement;

/// Builds a [`SemanticTree`] from classified elements.
///
/// Two rules decide where an element goes:
///
/// 1. **Containment.** An element whose DOM node lies inside another
///    element's node nests under it. A composite's inner elements therefore
///    nest under the composite.
/// 2. **Headings.** An element with level `L` owns every following element
///    until one with level `<= L` shows up. Elements without a level never
///    close a heading's section.
///
/// Containment wins: a heading's section never reaches past the end of the
/// DOM container the heading sits in. Document order is preserved: a
/// pre-order walk of the result visits elements in input order, each
/// composite followed by its inner elements.
pub struct TreeBuilder;

struct Entry {
    element: SemanticElement,
    /// Index of the composite entry this element came from.
    owner: Option<usize>,
}

struct Frame {
    entry: usize,
    node: TreeNode,
    /// Nearest enclosing entry when the frame was opened.
    scope: Option<usize>,
}

impl TreeBuilder {
    pub fn build(dom: &Dom, elements: Vec<SemanticElement>) -> SemanticTree<'_> {
        let entries = flatten(elements);
        let mut roots = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

        for index in 0..entries.len() {
            while let Some(top) = stack.last() {
                if accepts(dom, &entries, top, index) {
                    break;
                }
                close_frame(&mut stack, &mut roots);
            }

            if let Some(level) = entries[index].element.level() {
                report_level_mismatch(dom, &entries, &stack, index, level);
            }

            let scope = stack
                .iter()
                .rev()
                .map(|frame| frame.entry)
                .find(|&entry| encloses(dom, &entries, entry, index));
            stack.push(Frame {
                entry: index,
                node: TreeNode::new(entries[index].element.clone()),
                scope,
            });
        }

        while !stack.is_empty() {
            close_frame(&mut stack, &mut roots);
        }

        SemanticTree::new(dom, roots)
    }
}

/// Pre-order list of elements, composite inner elements right after their
/// composite.
fn flatten(elements: Vec<SemanticElement>) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(elements.len());
    let mut pending: Vec<(SemanticElement, Option<usize>)> =
        elements.into_iter().rev().map(|e| (e, None)).collect();

    while let Some((element, owner)) = pending.pop() {
        let index = entries.len();
        pending.extend(
            element
                .inner_elements()
                .iter()
                .rev()
                .map(|inner| (inner.clone(), Some(index))),
        );
        entries.push(Entry { element, owner });
    }
    entries
}

/// Check whether entry `outer` contains entry `inner`, by composite
/// ownership or by DOM ancestry.
fn encloses(dom: &Dom, entries: &[Entry], outer: usize, inner: usize) -> bool {
    let mut owner = entries[inner].owner;
    while let Some(current) = owner {
        if current == outer {
            return true;
        }
        owner = entries[current].owner;
    }
    dom.is_ancestor(entries[outer].element.node(), entries[inner].element.node())
}

fn accepts(dom: &Dom, entries: &[Entry], top: &Frame, index: usize) -> bool {
    if encloses(dom, entries, top.entry, index) {
        return true;
    }
    let Some(top_level) = entries[top.entry].element.level() else {
        return false;
    };
    let opens_section = match entries[index].element.level() {
        Some(level) => level > top_level,
        None => true,
    };
    opens_section && top.scope.is_none_or(|scope| encloses(dom, entries, scope, index))
}

/// Check whether a heading at `level` lands under an open section it would
/// have closed. Only containment keeps such a section open.
fn is_level_mismatch(entries: &[Entry], stack: &[Frame], level: u8) -> bool {
    stack
        .iter()
        .filter_map(|frame| entries[frame.entry].element.level())
        .any(|open| open >= level)
}

/// Warn when containment keeps a heading from closing an open section.
fn report_level_mismatch(
    dom: &Dom,
    entries: &[Entry],
    stack: &[Frame],
    index: usize,
    level: u8,
) {
    if is_level_mismatch(entries, stack, level) {
        let element = &entries[index].element;
        warn!(
            node = ?element.node(),
            level,
            text = %element.text(dom),
            "heading level mismatch: heading is nested inside a container"
        );
    }
}

fn close_frame(stack: &mut Vec<Frame>, roots: &mut Vec<TreeNode>) {
    let Some(frame) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.node.add_child(frame.node),
        None => roots.push(frame.node),
    }
}
