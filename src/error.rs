//! Error types for secparse operations.

use thiserror::Error;

use crate::dom::NodeId;

/// Errors that can occur while classifying elements or building the tree.
///
/// Classification ambiguity is never an error: elements no step recognizes
/// simply stay `NotYetClassified`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("composite element for node {node:?} has no inner elements")]
    EmptyComposite { node: NodeId },

    #[error("element references node {0:?} which is not in the DOM")]
    UnknownNode(NodeId),

    #[error("node {0:?} is wrapped by more than one element")]
    DuplicateNode(NodeId),
}

pub type Result<T> = std::result::Result<T, Error>;
