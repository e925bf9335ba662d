//! Display list for one frame of the canvas surface.
//!
//! `build_scene` flattens the board, connection layer and any in-progress
//! gesture into `RenderItem`s in paint order. Node content itself is drawn
//! by an external `NodeRenderer`; the list only says which node goes where
//! and with which flags.

use crate::connection::{self, ConnectionPath};
use crate::grid::{GRID_BACKGROUND, GridSpec};
use uxb_core::{Board, Bounds, CanvasNode, NodeId, NodeType, Point, Viewport};

/// Pointer cursor the surface should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Grab,
    Grabbing,
    Crosshair,
    Text,
    Alias,
}

impl CursorHint {
    /// CSS cursor keyword.
    pub fn css(&self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
            CursorHint::Crosshair => "crosshair",
            CursorHint::Text => "text",
            CursorHint::Alias => "alias",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeFlags {
    pub selected: bool,
    /// Draw corner resize handles.
    pub resizable: bool,
}

/// Transient overlay for an active gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Shape being stamped, canvas space.
    StampDraft { node_type: NodeType, bounds: Bounds },
    /// Freehand stroke in progress, canvas space.
    Freehand {
        points: Vec<Point>,
        color: String,
        stroke_width: f32,
    },
    /// Connection from `start` to the pointer (canvas space).
    Connection { start: NodeId, pointer: Point },
    /// Marquee rectangle, screen space.
    SelectionBox { rect: Bounds },
    /// Live size readout while resizing.
    Dimensions { node: NodeId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    Background {
        color: &'static str,
    },
    Grid(GridSpec),
    Node {
        id: NodeId,
        z_index: u32,
        flags: NodeFlags,
    },
    Connection(ConnectionPath),
    StampDraft {
        node_type: NodeType,
        bounds: Bounds,
    },
    FreehandPreview {
        path: String,
        color: String,
        stroke_width: f32,
    },
    /// Screen space; drawn after the viewport transform is popped.
    SelectionBox {
        rect: Bounds,
    },
    DimensionLabel {
        anchor: Point,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub cursor: CursorHint,
    pub items: Vec<RenderItem>,
}

impl Scene {
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, NodeFlags)> + '_ {
        self.items.iter().filter_map(|item| match item {
            RenderItem::Node { id, flags, .. } => Some((*id, *flags)),
            _ => None,
        })
    }

    pub fn connections(&self) -> impl Iterator<Item = &ConnectionPath> {
        self.items.iter().filter_map(|item| match item {
            RenderItem::Connection(path) => Some(path),
            _ => None,
        })
    }
}

/// Everything `build_scene` needs besides the board.
pub struct SceneInput<'a> {
    pub viewport: Viewport,
    pub grid_spacing: f32,
    pub cursor: CursorHint,
    pub selected: &'a dyn Fn(NodeId) -> bool,
    pub previews: &'a [Preview],
}

/// SVG polyline `M x y L x y ...` with every point shifted by `-origin`.
pub fn polyline_path(points: &[Point], origin: Point) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        out.push_str(&format!("{cmd} {} {}", p.x - origin.x, p.y - origin.y));
    }
    out
}

/// `"<w> × <h>"` with both sides rounded.
pub fn dimension_label(node: &CanvasNode) -> String {
    let b = node.bounds_or(uxb_core::ANCHOR_FALLBACK_HEIGHT);
    format!("{} × {}", b.width.round(), b.height.round())
}

/// Flatten one frame into paint order: background, grid, nodes, connections,
/// gesture previews.
pub fn build_scene(board: &Board, input: SceneInput<'_>) -> Scene {
    let mut items = vec![
        RenderItem::Background {
            color: GRID_BACKGROUND,
        },
        RenderItem::Grid(GridSpec::for_viewport(&input.viewport, input.grid_spacing)),
    ];

    for node in board.nodes_by_z() {
        items.push(RenderItem::Node {
            id: node.id,
            z_index: node.z_index,
            flags: NodeFlags {
                selected: (input.selected)(node.id),
                resizable: node.is_resizable(),
            },
        });
    }

    items.extend(
        connection::connection_layer(board)
            .into_iter()
            .map(RenderItem::Connection),
    );

    for preview in input.previews {
        match preview {
            Preview::StampDraft { node_type, bounds } => items.push(RenderItem::StampDraft {
                node_type: *node_type,
                bounds: *bounds,
            }),
            Preview::Freehand {
                points,
                color,
                stroke_width,
            } => {
                if points.len() > 1 {
                    items.push(RenderItem::FreehandPreview {
                        path: polyline_path(points, Point::ORIGIN),
                        color: color.clone(),
                        stroke_width: *stroke_width,
                    });
                }
            }
            Preview::Connection { start, pointer } => {
                if let Some(path) = connection::preview_path(board, *start, *pointer) {
                    items.push(RenderItem::Connection(path));
                }
            }
            Preview::SelectionBox { rect } => items.push(RenderItem::SelectionBox { rect: *rect }),
            Preview::Dimensions { node } => {
                if let Some(n) = board.get(*node) {
                    let b = n.bounds_or(uxb_core::ANCHOR_FALLBACK_HEIGHT);
                    items.push(RenderItem::DimensionLabel {
                        anchor: Point::new(b.center().x, b.bottom()),
                        text: dimension_label(n),
                    });
                }
            }
        }
    }

    log::trace!("scene: {} items, zoom {}", items.len(), input.viewport.zoom);
    Scene {
        viewport: input.viewport,
        cursor: input.cursor,
        items,
    }
}

// ─── Node renderer seam ──────────────────────────────────────────────────

/// Draws a single node's content. Implemented by the presentation layer,
/// one renderer per node type. Edits flow back through the editor, never
/// through this trait.
pub trait NodeRenderer {
    fn render_node(&mut self, node: &CanvasNode, flags: NodeFlags);
}

/// Hand every node item of `scene` to `renderer` in paint order.
/// Returns how many nodes were drawn.
pub fn render_nodes(scene: &Scene, board: &Board, renderer: &mut dyn NodeRenderer) -> usize {
    let mut drawn = 0;
    for (id, flags) in scene.nodes() {
        let Some(node) = board.get(id) else {
            continue;
        };
        log::trace!(
            "NODE {} {} at ({}, {}) selected={}",
            id,
            node.node_type,
            node.x,
            node.y,
            flags.selected
        );
        renderer.render_node(node, flags);
        drawn += 1;
    }
    drawn
}
