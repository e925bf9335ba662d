//! The board: every node on the canvas plus the directed edges between them.
//!
//! Nodes are graph vertices and connections are graph edges, so removing a
//! node drops its incident connections in the same call.

use crate::error::{EditorError, EditorResult};
use crate::geometry::{Bounds, Point};
use crate::id::{EdgeId, NodeId};
use crate::model::{CanvasNode, Edge, HIT_FALLBACK_WIDTH, HasOptionalHeight, NodeData};
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use std::collections::HashMap;

// ─── Z counter ───────────────────────────────────────────────────────────

/// Monotonic z-index source. Seeded past the highest existing z so a new or
/// raised node always paints above everything already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZCounter {
    next: u32,
}

impl ZCounter {
    pub fn seeded<'a>(nodes: impl IntoIterator<Item = &'a CanvasNode>) -> Self {
        let next = nodes
            .into_iter()
            .map(|n| n.z_index)
            .max()
            .map_or(1, |z| z.saturating_add(1));
        Self { next }
    }

    /// Hand out the next z-index.
    pub fn take(&mut self) -> u32 {
        let z = self.next;
        self.next = self.next.saturating_add(1);
        z
    }

    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for ZCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

// ─── Board ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Board {
    graph: StableDiGraph<CanvasNode, Edge>,
    /// Index from NodeId → NodeIndex for fast lookup.
    id_index: HashMap<NodeId, NodeIndex>,
    /// Insertion sequence per node. Breaks z ties; NodeIndex slots get reused.
    sequence: HashMap<NodeId, u64>,
    next_sequence: u64,
    z: ZCounter,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from existing nodes, keeping their z-indices and seeding
    /// the z counter past the highest one.
    pub fn from_nodes(nodes: impl IntoIterator<Item = CanvasNode>) -> Self {
        let mut board = Self::new();
        for node in nodes {
            board.insert_raw(node);
        }
        board.z = ZCounter::seeded(board.graph.node_weights());
        board
    }

    fn insert_raw(&mut self, node: CanvasNode) -> NodeIndex {
        let id = node.id;
        if let Some(&idx) = self.id_index.get(&id) {
            self.graph[idx] = node;
            return idx;
        }
        let idx = self.graph.add_node(node);
        self.id_index.insert(id, idx);
        self.sequence.insert(id, self.next_sequence);
        self.next_sequence += 1;
        idx
    }

    /// Add a node on top of everything else. An existing node with the same
    /// id is replaced in place and keeps its connections.
    pub fn insert(&mut self, mut node: CanvasNode) -> NodeId {
        node.z_index = self.z.take();
        let id = node.id;
        log::trace!("board: insert {id} z={}", node.z_index);
        self.insert_raw(node);
        id
    }

    /// Remove a node and every connection touching it.
    pub fn remove(&mut self, id: NodeId) -> EditorResult<CanvasNode> {
        let idx = self.index_of(id)?;
        let removed = self
            .graph
            .remove_node(idx)
            .ok_or(EditorError::StaleNodeReference(id))?;
        self.id_index.remove(&id);
        self.sequence.remove(&id);
        log::trace!("board: remove {id}");
        Ok(removed)
    }

    fn index_of(&self, id: NodeId) -> EditorResult<NodeIndex> {
        self.id_index
            .get(&id)
            .copied()
            .ok_or(EditorError::StaleNodeReference(id))
    }

    pub fn get(&self, id: NodeId) -> Option<&CanvasNode> {
        self.id_index.get(&id).map(|idx| &self.graph[*idx])
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut CanvasNode> {
        self.id_index
            .get(&id)
            .copied()
            .map(|idx| &mut self.graph[idx])
    }

    /// Like `get`, but a missing id is an error.
    pub fn require(&self, id: NodeId) -> EditorResult<&CanvasNode> {
        self.get(id).ok_or(EditorError::StaleNodeReference(id))
    }

    fn require_mut(&mut self, id: NodeId) -> EditorResult<&mut CanvasNode> {
        self.get_mut(id).ok_or(EditorError::StaleNodeReference(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.id_index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &CanvasNode> {
        self.graph.node_weights()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().map(|n| n.id)
    }

    /// Nodes in paint order: ascending z, ties by insertion order.
    pub fn nodes_by_z(&self) -> Vec<&CanvasNode> {
        let mut nodes: Vec<&CanvasNode> = self.graph.node_weights().collect();
        nodes.sort_by_key(|n| (n.z_index, self.sequence.get(&n.id).copied().unwrap_or(0)));
        nodes
    }

    // ─── Edges ───────────────────────────────────────────────────────────

    /// Connect `start` → `end`.
    ///
    /// # Errors
    /// `DegenerateGesture` for a self-connection, `StaleNodeReference` if
    /// either end is gone.
    pub fn connect(&mut self, start: NodeId, end: NodeId) -> EditorResult<Edge> {
        if start == end {
            return Err(EditorError::DegenerateGesture("connection to itself"));
        }
        let a = self.index_of(start)?;
        let b = self.index_of(end)?;
        let edge = Edge {
            id: EdgeId::generate(),
            start,
            end,
        };
        self.graph.add_edge(a, b, edge);
        log::trace!("board: connect {start} -> {end}");
        Ok(edge)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Connections with `id` at either end.
    pub fn edges_of(&self, id: NodeId) -> Vec<Edge> {
        self.graph
            .edge_weights()
            .filter(|e| e.touches(id))
            .copied()
            .collect()
    }

    // ─── Targeted patches ────────────────────────────────────────────────

    pub fn set_position(&mut self, id: NodeId, origin: Point) -> EditorResult<()> {
        let node = self.require_mut(id)?;
        node.x = origin.x;
        node.y = origin.y;
        Ok(())
    }

    /// Move and resize in one patch. The height goes to `data.height`.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Bounds) -> EditorResult<()> {
        let node = self.require_mut(id)?;
        node.x = bounds.x;
        node.y = bounds.y;
        node.width = bounds.width;
        node.set_height(bounds.height);
        Ok(())
    }

    pub fn set_data(&mut self, id: NodeId, data: NodeData) -> EditorResult<()> {
        self.require_mut(id)?.data = data;
        Ok(())
    }

    /// Raise a node above everything else. Returns its new z-index.
    pub fn bring_to_front(&mut self, id: NodeId) -> EditorResult<u32> {
        self.index_of(id)?;
        let z = self.z.take();
        self.require_mut(id)?.z_index = z;
        Ok(z)
    }

    /// The z-index the next inserted node will receive.
    pub fn next_z(&self) -> u32 {
        self.z.peek()
    }

    /// Union of every node's box, using `fallback_height` when a node has no
    /// height and `HIT_FALLBACK_WIDTH` when it has no width.
    pub fn content_bounds(&self, fallback_height: f32) -> Option<Bounds> {
        self.graph
            .node_weights()
            .map(|n| {
                Bounds::new(n.x, n.y, n.width_or(HIT_FALLBACK_WIDTH), n.height_or(fallback_height))
            })
            .reduce(|acc, b| acc.union(&b))
    }
}
