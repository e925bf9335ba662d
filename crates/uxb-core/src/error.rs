//! Editor error type.
//!
//! Every rejected operation leaves the board, edges, selection and viewport
//! untouched. Nothing here is retryable or fatal; the variants exist so callers
//! and tests can tell *why* an interaction was a no-op.

use crate::id::NodeId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// A template drop or registry lookup named a type tag that does not exist.
    #[error("unknown node type `{0}`")]
    UnknownNodeType(String),

    /// An operation referenced a node id that is no longer on the board.
    #[error("node {0} no longer exists")]
    StaleNodeReference(NodeId),

    /// A template drop landed outside the canvas or had an unusable rectangle.
    #[error("invalid drop: {0}")]
    InvalidDrop(String),

    /// A gesture ended without producing anything (stray click, self-connection,
    /// release over empty canvas, ...).
    #[error("degenerate gesture: {0}")]
    DegenerateGesture(&'static str),
}

pub type EditorResult<T> = Result<T, EditorError>;
