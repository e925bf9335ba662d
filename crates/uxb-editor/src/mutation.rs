//! Targeted board patches.
//!
//! Every change the engine makes to the board goes through a
//! `BoardMutation`, so each gesture frame touches exactly one node (or one
//! edge) instead of rebuilding the collection.

use uxb_core::{Board, Bounds, CanvasNode, EditorResult, NodeData, NodeId, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum BoardMutation {
    /// Put a node's top-left at `to` (canvas space).
    MoveNode { id: NodeId, to: Point },
    /// Set position, width and `data.height` together.
    ResizeNode { id: NodeId, bounds: Bounds },
    /// Insert on top of the z-order.
    AddNode { node: Box<CanvasNode> },
    /// Remove a node and its connections.
    RemoveNode { id: NodeId },
    /// Replace a node's payload (renderer edits).
    SetData { id: NodeId, data: NodeData },
    Connect { start: NodeId, end: NodeId },
    BringToFront { id: NodeId },
}

impl BoardMutation {
    /// Apply to `board`. Rejected mutations leave the board untouched.
    pub fn apply(self, board: &mut Board) -> EditorResult<()> {
        log::trace!("mutation: {self:?}");
        match self {
            BoardMutation::MoveNode { id, to } => board.set_position(id, to),
            BoardMutation::ResizeNode { id, bounds } => board.set_bounds(id, bounds),
            BoardMutation::AddNode { node } => {
                board.insert(*node);
                Ok(())
            }
            BoardMutation::RemoveNode { id } => board.remove(id).map(|_| ()),
            BoardMutation::SetData { id, data } => board.set_data(id, data),
            BoardMutation::Connect { start, end } => board.connect(start, end).map(|_| ()),
            BoardMutation::BringToFront { id } => board.bring_to_front(id).map(|_| ()),
        }
    }
}
