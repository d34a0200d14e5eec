//! Arena-based DOM for HTML filings.
//!
//! All nodes live in one contiguous vector and refer to each other by index.
//! Semantic elements hold a [`NodeId`] into this arena instead of a pointer,
//! so any number of elements, steps and trees can reference the same document
//! without shared ownership.

use html5ever::{LocalName, QualName, ns};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node payload in the arena DOM.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Pre-extracted id attribute.
        id: Option<String>,
    },
    /// Text content.
    Text(String),
    /// Comment (kept so the sink can hand out handles for it).
    Comment(String),
    /// Document type declaration.
    Doctype { name: String },
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node in the arena DOM.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Elements whose text never counts as visible content.
const NON_TEXT_TAGS: &[&str] = &["script", "style", "head", "title", "template"];

/// Arena-allocated DOM tree of one filing.
#[derive(Debug)]
pub struct Dom {
    nodes: Vec<Node>,
    document: NodeId,
}

impl Dom {
    /// Create an empty DOM containing only the document node.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        dom.document = dom.alloc(Node::new(NodeData::Document));
        dom
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document node ID.
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Check that `id` refers to a node in this arena.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Create a new element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let id = attrs
            .iter()
            .find(|a| a.name.local.as_ref() == "id")
            .map(|a| a.value.clone());

        self.alloc(Node::new(NodeData::Element { name, attrs, id }))
    }

    /// Create an HTML element from a tag name and `(name, value)` attribute pairs.
    pub fn create_html_element(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(name, value)| Attribute {
                name: html_name(name),
                value: (*value).to_string(),
            })
            .collect();
        self.create_element(html_name(tag), attrs)
    }

    /// Create a new text node.
    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    /// Create a doctype node.
    pub fn create_doctype(&mut self, name: String) -> NodeId {
        self.alloc(Node::new(NodeData::Doctype { name }))
    }

    /// Append a child to a parent node.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = NodeId::NONE;
        }

        if let Some(last_node) = self.get_mut(last_child) {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Detach a node from its parent, keeping its own subtree intact.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Append text to the last child if it is a text node, otherwise add a new one.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let NodeData::Text(existing) = &mut last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Number of nodes, including the document node.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the DOM holds nothing but the document node.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over all children of a node.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children {
            dom: self,
            current: first,
        }
    }

    /// Iterate over the element children of a node, skipping text and comments.
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent).filter(|&id| self.is_element(id))
    }

    /// Iterate over all strict descendants of a node in document order.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(root).collect();
        stack.reverse();
        Descendants { dom: self, stack }
    }

    /// Find the first node in document order matching a predicate.
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        let document = self.document;
        if self.get(document).is_some_and(&predicate) {
            return Some(document);
        }
        self.descendants(document)
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// Find the first element with the given tag name.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|node| match &node.data {
            NodeData::Element { name, .. } => name.local.as_ref() == tag,
            _ => false,
        })
    }

    /// Check whether `ancestor` strictly contains `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.get(node).map(|n| n.parent).unwrap_or(NodeId::NONE);
        while current.is_some() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map(|n| n.parent).unwrap_or(NodeId::NONE);
        }
        false
    }

    /// Check whether any strict descendant of `root` is a `tag` element.
    pub fn contains_tag(&self, root: NodeId, tag: &str) -> bool {
        self.descendants(root).any(|id| self.tag_name(id) == Some(tag))
    }

    /// The node whose element children form the top level of the document.
    ///
    /// This is `<body>` when the parser produced one, otherwise the document
    /// element, otherwise the document node itself.
    pub fn content_root(&self) -> NodeId {
        if let Some(body) = self.find_by_tag("body") {
            return body;
        }
        self.element_children(self.document)
            .next()
            .unwrap_or(self.document)
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

fn html_name(local: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(local))
}

/// Iterator over children of a node.
pub struct Children<'a> {
    dom: &'a Dom,
    current: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(self.dom.children(id));
        self.stack[start..].reverse();
        Some(id)
    }
}

/// Convenience accessors for element and text nodes.
impl Dom {
    /// Get an element's local name.
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    /// Get an element's tag name as a string slice.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element_name(id).map(|name| name.as_ref())
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Get an element's id attribute.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { id, .. } => id.as_deref(),
            _ => None,
        })
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// Get the content of a text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated visible text of a node and all its descendants.
    ///
    /// Text inside `script`, `style` and similar non-rendered elements is skipped.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(s) => out.push_str(s),
            NodeData::Element { name, .. } if NON_TEXT_TAGS.contains(&name.local.as_ref()) => {}
            NodeData::Element { .. } | NodeData::Document => {
                for child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            NodeData::Comment(_) | NodeData::Doctype { .. } => {}
        }
    }

    /// Visible text with leading and trailing whitespace removed.
    pub fn trimmed_text(&self, id: NodeId) -> String {
        self.text(id).trim().to_string()
    }
}
