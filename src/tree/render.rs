//! Text rendering of a semantic tree.

use std::fmt::Write;

use colored::Colorize;

use super::{SemanticTree, TreeNode};
use crate::semantic::{ElementKind, KindSet};
use crate::util::{collapse_whitespace, truncate_chars};

/// Line length used when no positive limit is given.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 50;

/// Options for [`SemanticTree::render`].
///
/// ```
/// use secparse::{ElementKind, KindSet, RenderOptions};
///
/// let options = RenderOptions::default()
///     .pretty(false)
///     .ignored_types(KindSet::of(&[ElementKind::Irrelevant, ElementKind::Empty]))
///     .max_line_length(80);
/// assert_eq!(options.effective_max_line_length(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pretty: bool,
    ignored_types: KindSet,
    max_line_length: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            ignored_types: KindSet::single(ElementKind::Irrelevant),
            max_line_length: None,
        }
    }
}

impl RenderOptions {
    /// Toggle ANSI colors: bold blue class names, bold bright green levels.
    ///
    /// Styling goes through `colored`, so it also honors `NO_COLOR` and
    /// `CLICOLOR`, and is skipped when stdout is not a terminal unless
    /// `colored::control::set_override` says otherwise.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Kinds to hide, together with everything nested under them.
    ///
    /// An empty set hides nothing.
    pub fn ignored_types(mut self, kinds: KindSet) -> Self {
        self.ignored_types = kinds;
        self
    }

    /// Maximum number of text characters per line. Zero restores the
    /// default.
    pub fn max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = Some(max);
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn ignored(&self) -> KindSet {
        self.ignored_types
    }

    pub fn effective_max_line_length(&self) -> usize {
        match self.max_line_length {
            Some(max) if max > 0 => max,
            _ => DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

struct Pending<'t> {
    node: &'t TreeNode,
    prefix: String,
    is_last: bool,
    is_root: bool,
}

impl SemanticTree<'_> {
    /// Render the tree as an indented outline, one line per visible node.
    ///
    /// Lines look like `TitleElement[L1]: Item 1. Business`; nested lines
    /// get `├── ` / `└── ` connectors. The result has no trailing newline.
    pub fn render(&self, options: &RenderOptions) -> String {
        let max_len = options.effective_max_line_length();
        let mut lines: Vec<String> = Vec::new();
        let mut stack = pending_children(self.roots(), "", true);

        while let Some(item) = stack.pop() {
            let element = item.node.element();
            if element.is_any(options.ignored_types) {
                continue;
            }

            let mut line = String::new();
            if !item.is_root {
                line.push_str(&item.prefix);
                line.push_str(if item.is_last { "└── " } else { "├── " });
            }
            push_label(&mut line, element.name(), element.level(), options.pretty);

            let text = collapse_whitespace(&element.text(self.dom()));
            if !text.is_empty() {
                line.push_str(": ");
                line.push_str(&truncate_chars(&text, max_len));
            }
            lines.push(line);

            let child_prefix = if item.is_root {
                String::new()
            } else {
                let mut prefix = item.prefix.clone();
                prefix.push_str(if item.is_last { "    " } else { "│   " });
                prefix
            };
            stack.extend(pending_children(item.node.children(), &child_prefix, false));
        }

        lines.join("\n")
    }
}

/// Work items for `nodes`, reversed so the first node pops first.
fn pending_children<'t>(nodes: &'t [TreeNode], prefix: &str, is_root: bool) -> Vec<Pending<'t>> {
    let last = nodes.len().saturating_sub(1);
    nodes
        .iter()
        .enumerate()
        .rev()
        .map(|(i, node)| Pending {
            node,
            prefix: prefix.to_string(),
            is_last: i == last,
            is_root,
        })
        .collect()
}

fn push_label(line: &mut String, name: &str, level: Option<u8>, pretty: bool) {
    let level = level.map(|level| format!("[L{level}]"));
    if pretty {
        let _ = write!(line, "{}", name.blue().bold());
        if let Some(level) = level {
            let _ = write!(line, "{}", level.as_str().bright_green().bold());
        }
    } else {
        line.push_str(name);
        if let Some(level) = level {
            line.push_str(&level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Dom, parse_html};
    use crate::semantic::{SemanticElement, lift_elements};
    use crate::tree::TreeBuilder;

    fn plain() -> RenderOptions {
        RenderOptions::default().pretty(false)
    }

    fn kinds(dom: &Dom, kinds: &[ElementKind]) -> Vec<SemanticElement> {
        lift_elements(dom)
            .into_iter()
            .zip(kinds)
            .map(|(e, &kind)| e.reclassified(kind))
            .collect()
    }

    #[test]
    fn test_irrelevant_elements_are_hidden_by_default() {
        let dom = parse_html("<p>1</p><p>Revenue</p>");
        let elements = kinds(&dom, &[ElementKind::Irrelevant, ElementKind::NotYetClassified]);
        let tree = TreeBuilder::build(&dom, elements);

        assert_eq!(tree.render(&plain()), "NotYetClassifiedElement: Revenue");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let text = "x".repeat(60);
        let dom = parse_html(&format!("<p>{text}</p>"));
        let tree = TreeBuilder::build(&dom, kinds(&dom, &[ElementKind::Text]));

        let rendered = tree.render(&plain().max_line_length(50));

        assert_eq!(rendered, format!("TextElement: {}...", "x".repeat(50)));
    }

    #[test]
    fn test_zero_line_length_uses_default() {
        let options = RenderOptions::default().max_line_length(0);
        assert_eq!(options.effective_max_line_length(), DEFAULT_MAX_LINE_LENGTH);
    }

    #[test]
    fn test_connectors_and_prefixes() {
        let dom = parse_html("<p>A</p><p>B</p><p>b1</p><p>C</p><p>c1</p>");
        let elements: Vec<_> = lift_elements(&dom)
            .into_iter()
            .zip([Some(1), Some(2), None, Some(2), None])
            .map(|(e, level)| match level {
                Some(l) => e.reclassified(ElementKind::Title).with_level(l),
                None => e.reclassified(ElementKind::Text),
            })
            .collect();
        let tree = TreeBuilder::build(&dom, elements);

        let expected = [
            "TitleElement[L1]: A",
            "├── TitleElement[L2]: B",
            "│   └── TextElement: b1",
            "└── TitleElement[L2]: C",
            "    └── TextElement: c1",
        ]
        .join("\n");
        assert_eq!(tree.render(&plain()), expected);
    }

    #[test]
    fn test_ignored_subtree_is_skipped() {
        let dom = parse_html("<p>A</p><p>hidden</p><p>B</p>");
        let elements: Vec<_> = lift_elements(&dom)
            .into_iter()
            .enumerate()
            .map(|(i, e)| match i {
                0 => e.reclassified(ElementKind::Irrelevant).with_level(1),
                1 => e.reclassified(ElementKind::Text),
                _ => e.reclassified(ElementKind::Title).with_level(1),
            })
            .collect();
        let tree = TreeBuilder::build(&dom, elements);

        assert_eq!(tree.render(&plain()), "TitleElement[L1]: B");
    }

    #[test]
    fn test_empty_ignore_set_shows_everything() {
        let dom = parse_html("<p>1</p><p>Revenue</p>");
        let elements = kinds(&dom, &[ElementKind::Irrelevant, ElementKind::Text]);
        let tree = TreeBuilder::build(&dom, elements);

        let rendered = tree.render(&plain().ignored_types(KindSet::EMPTY));

        assert_eq!(rendered, "IrrelevantElement: 1\nTextElement: Revenue");
    }

    #[test]
    fn test_pretty_output_uses_ansi_codes() {
        colored::control::set_override(true);
        let dom = parse_html("<h1>Title</h1>");
        let elements = vec![
            lift_elements(&dom)
                .remove(0)
                .reclassified(ElementKind::Title)
                .with_level(1),
        ];
        let tree = TreeBuilder::build(&dom, elements);

        assert_eq!(
            tree.render(&RenderOptions::default()),
            "\x1b[1;34mTitleElement\x1b[0m\x1b[1;92m[L1]\x1b[0m: Title"
        );
    }

    #[test]
    fn test_whitespace_is_collapsed_and_empty_text_omitted() {
        let dom = parse_html("<p>Net\n   income</p><div></div>");
        let elements = kinds(&dom, &[ElementKind::Text, ElementKind::Empty]);
        let tree = TreeBuilder::build(&dom, elements);

        assert_eq!(tree.render(&plain()), "TextElement: Net income\nEmptyElement");
    }

    #[test]
    fn test_empty_tree_renders_empty_string() {
        let dom = parse_html("");
        let tree = TreeBuilder::build(&dom, Vec::new());
        assert_eq!(tree.render(&RenderOptions::default()), "");
    }
}
