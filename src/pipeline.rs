//! The ordered step pipeline.

use std::collections::HashSet;

use tracing::debug;

use crate::dom::{self, Dom, NodeId};
use crate::error::{Error, Result};
use crate::semantic::{SemanticElement, lift_elements};
use crate::steps::{ProcessingStep, default_steps};
use crate::tree::{SemanticTree, TreeBuilder};

/// An ordered list of processing steps.
///
/// Each step's output is the exact input of the next one. After every step
/// the sequence is checked for structural violations (unknown nodes, nodes
/// wrapped twice), which fail the run immediately.
pub struct Pipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_steps(default_steps())
    }
}

impl Pipeline {
    /// Build a pipeline from a custom list of steps, run in the given order.
    pub fn with_steps(steps: Vec<Box<dyn ProcessingStep>>) -> Self {
        Self { steps }
    }

    /// Keep only the steps for which `keep` returns true, preserving order.
    ///
    /// ```
    /// use secparse::{CompositeElementCreator, Pipeline};
    ///
    /// let pipeline = Pipeline::default()
    ///     .retain(|step| step.name() == CompositeElementCreator::NAME);
    /// assert_eq!(pipeline.step_names(), vec!["CompositeElementCreator"]);
    /// ```
    pub fn retain<F>(mut self, mut keep: F) -> Self
    where
        F: FnMut(&dyn ProcessingStep) -> bool,
    {
        self.steps.retain(|step| keep(step.as_ref()));
        self
    }

    /// Names of the configured steps, in run order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step over `elements`.
    pub fn run(&self, dom: &Dom, elements: Vec<SemanticElement>) -> Result<Vec<SemanticElement>> {
        validate(dom, &elements)?;
        let mut elements = elements;
        for step in &self.steps {
            let before = elements.len();
            elements = step.process(dom, elements)?;
            validate(dom, &elements)?;
            debug!(
                step = step.name(),
                before,
                after = elements.len(),
                "processing step finished"
            );
        }
        Ok(elements)
    }

    /// Parse an HTML document and classify its top-level elements.
    pub fn parse(&self, html: &str) -> Result<ParsedDocument> {
        self.classify(dom::parse_html(html))
    }

    /// Parse raw HTML bytes (encoding detected) and classify them.
    pub fn parse_bytes(&self, html: &[u8]) -> Result<ParsedDocument> {
        self.classify(dom::parse_html_bytes(html))
    }

    /// Classify the top-level elements of an already parsed DOM.
    pub fn classify(&self, dom: Dom) -> Result<ParsedDocument> {
        let elements = lift_elements(&dom);
        debug!(elements = elements.len(), "lifted top-level elements");
        let elements = self.run(&dom, elements)?;
        Ok(ParsedDocument { dom, elements })
    }
}

/// A parsed document: the DOM and its classified flat element sequence.
#[derive(Debug)]
pub struct ParsedDocument {
    pub dom: Dom,
    pub elements: Vec<SemanticElement>,
}

impl ParsedDocument {
    /// Build the semantic tree of the classified elements.
    pub fn tree(&self) -> SemanticTree<'_> {
        TreeBuilder::build(&self.dom, self.elements.clone())
    }
}

/// Fail on elements that reference missing nodes or share a node.
fn validate(dom: &Dom, elements: &[SemanticElement]) -> Result<()> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<&SemanticElement> = elements.iter().collect();
    while let Some(element) = stack.pop() {
        let node = element.node();
        if !dom.contains_node(node) {
            return Err(Error::UnknownNode(node));
        }
        if !seen.insert(node) {
            return Err(Error::DuplicateNode(node));
        }
        stack.extend(element.inner_elements());
    }
    Ok(())
}
