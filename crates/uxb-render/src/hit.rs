//! Hit testing: point → node lookup.
//!
//! Walks the board front-to-back (highest z first) to find which node is at
//! a canvas position. Nodes without a height use the 200-unit fallback box.

use uxb_core::{Board, Bounds, NodeId, Point};

/// Find the topmost node at canvas point `p`.
/// Returns `None` if no node is hit (background).
pub fn hit_test(board: &Board, p: Point) -> Option<NodeId> {
    board
        .nodes_by_z()
        .into_iter()
        .rev()
        .find(|n| n.hit_bounds().contains(p))
        .map(|n| n.id)
}

/// Find all nodes whose box strictly overlaps `rect` (canvas space).
/// Used for marquee (box) selection. Order follows paint order.
pub fn hit_test_rect(board: &Board, rect: Bounds) -> Vec<NodeId> {
    board
        .nodes_by_z()
        .into_iter()
        .filter(|n| n.hit_bounds().intersects(&rect))
        .map(|n| n.id)
        .collect()
}
