//! # secparse
//!
//! Semantic parsing of HTML financial filings (SEC EDGAR 10-K, 10-Q, 8-K).
//!
//! ## Overview
//!
//! A filing is parsed into an arena DOM, its top-level elements are lifted
//! into a flat sequence of [`SemanticElement`]s, and an ordered list of
//! [`ProcessingStep`]s classifies them: boilerplate, images, tables, text,
//! highlighted text and titles. Containers that mix text and tables become
//! composite elements that own their children. Finally the flat sequence is
//! nested into a [`SemanticTree`] following DOM containment and heading
//! levels.
//!
//! ## Quick Start
//!
//! ```
//! use secparse::{Pipeline, RenderOptions};
//!
//! let html = "<p><b>PART I</b></p><p>Revenue grew in every segment.</p>";
//! let doc = Pipeline::default().parse(html)?;
//!
//! let outline = doc.tree().render(&RenderOptions::default().pretty(false));
//! assert_eq!(
//!     outline,
//!     "TitleElement[L1]: PART I\n└── TextElement: Revenue grew in every segment."
//! );
//! # Ok::<(), secparse::Error>(())
//! ```
//!
//! ## Custom Pipelines
//!
//! Steps are plain values, so a pipeline can be trimmed or extended:
//!
//! ```
//! use secparse::{CompositeElementCreator, ElementKind, Pipeline};
//!
//! let pipeline = Pipeline::with_steps(vec![Box::new(CompositeElementCreator)]);
//! let doc = pipeline.parse("<div><p>Note</p><table><tr><td>1</td></tr></table></div>")?;
//! assert!(doc.elements[0].is(ElementKind::Composite));
//! # Ok::<(), secparse::Error>(())
//! ```

pub mod dom;
pub mod error;
pub mod pipeline;
pub mod semantic;
pub mod steps;
pub mod tree;
pub(crate) mod util;

pub use dom::{Dom, NodeId, parse_html, parse_html_bytes};
pub use error::{Error, Result};
pub use pipeline::{ParsedDocument, Pipeline};
pub use semantic::{ElementKind, KindSet, SemanticElement, lift_elements, unwrap_composites};
pub use steps::{
    CompositeElementCreator, ElementwiseStep, EmptyElementClassifier, HighlightStyle,
    HighlightedTextClassifier, ImageClassifier, IrrelevantElementClassifier, ProcessingStep,
    TableClassifier, TextClassifier, TitleClassifier, default_steps,
};
pub use tree::{RenderOptions, SemanticTree, TreeBuilder, TreeNode};
