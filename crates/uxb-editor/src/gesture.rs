//! Pointer gestures.
//!
//! At most one gesture is active at a time; `Gesture` makes that a type-level
//! fact. Every gesture captures a snapshot when it begins and each move
//! recomputes from that snapshot, never from the previous frame, so missed or
//! coalesced move events cannot accumulate error.
//!
//! Screen-space inputs are container pixels; canvas-space inputs have already
//! been through the viewport.

use uxb_core::{
    Bounds, CanvasNode, Freehand, NodeData, NodeId, NodePayload, NodeType, Point,
};
use uxb_render::polyline_path;

// ─── Drag ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub node: NodeId,
    /// Screen position of the pointer-down.
    pub pointer_start: Point,
    /// Canvas origin of the node at pointer-down.
    pub origin: Point,
}

impl DragGesture {
    /// `origin + (pointer - pointer_start) / zoom`.
    pub fn position(&self, pointer: Point, zoom: f32) -> Point {
        self.origin.offset(
            (pointer.x - self.pointer_start.x) / zoom,
            (pointer.y - self.pointer_start.y) / zoom,
        )
    }
}

// ─── Resize ──────────────────────────────────────────────────────────────

/// Corner resize affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tl" => Some(Handle::TopLeft),
            "tr" => Some(Handle::TopRight),
            "bl" => Some(Handle::BottomLeft),
            "br" => Some(Handle::BottomRight),
            _ => None,
        }
    }

    /// Dragging this handle moves the top edge.
    pub fn moves_top(&self) -> bool {
        matches!(self, Handle::TopLeft | Handle::TopRight)
    }

    /// Dragging this handle moves the left edge.
    pub fn moves_left(&self) -> bool {
        matches!(self, Handle::TopLeft | Handle::BottomLeft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    pub node: NodeId,
    pub handle: Handle,
    /// Screen position of the pointer-down.
    pub pointer_start: Point,
    /// Node box at pointer-down (height-or-100).
    pub initial: Bounds,
}

impl ResizeGesture {
    /// New box for the pointer at `pointer` (screen).
    ///
    /// `lock_aspect` keeps the initial `w/h`: the dimension that changed
    /// proportionally less is recomputed from the other. Both sides are
    /// clamped to `min_size`, and the edge opposite the handle stays put.
    pub fn bounds(&self, pointer: Point, zoom: f32, lock_aspect: bool, min_size: f32) -> Bounds {
        let ib = self.initial;
        let dx = (pointer.x - self.pointer_start.x) / zoom;
        let dy = (pointer.y - self.pointer_start.y) / zoom;

        let mut w = if self.handle.moves_left() {
            ib.width - dx
        } else {
            ib.width + dx
        };
        let mut h = if self.handle.moves_top() {
            ib.height - dy
        } else {
            ib.height + dy
        };

        if lock_aspect && ib.width > 0.0 && ib.height > 0.0 {
            let ratio = ib.width / ib.height;
            if (w / ib.width).abs() > (h / ib.height).abs() {
                h = w / ratio;
            } else {
                w = h * ratio;
            }
        }

        w = w.max(min_size);
        h = h.max(min_size);

        let x = if self.handle.moves_left() {
            ib.right() - w
        } else {
            ib.x
        };
        let y = if self.handle.moves_top() {
            ib.bottom() - h
        } else {
            ib.y
        };
        Bounds::new(x, y, w, h)
    }
}

// ─── Box select ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSelectGesture {
    /// Screen position of the pointer-down.
    pub start: Point,
    /// Latest screen position.
    pub current: Point,
}

impl BoxSelectGesture {
    /// Normalized marquee, screen space.
    pub fn rect(&self) -> Bounds {
        Bounds::from_corners(self.start, self.current)
    }
}

// ─── Stamp ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampGesture {
    pub node_type: NodeType,
    /// Canvas position of the pointer-down.
    pub anchor: Point,
    /// Latest canvas position.
    pub current: Point,
    pub square: bool,
}

impl StampGesture {
    pub fn new(node_type: NodeType, anchor: Point) -> Self {
        Self {
            node_type,
            anchor,
            current: anchor,
            square: false,
        }
    }

    /// Normalized draft box. With `square`, both sides take the larger
    /// extent and keep their own direction.
    pub fn draft(&self) -> Bounds {
        let mut w = self.current.x - self.anchor.x;
        let mut h = self.current.y - self.anchor.y;
        if self.square {
            let size = w.abs().max(h.abs());
            w = size.copysign(w);
            h = size.copysign(h);
        }
        let x = if w < 0.0 { self.anchor.x + w } else { self.anchor.x };
        let y = if h < 0.0 { self.anchor.y + h } else { self.anchor.y };
        Bounds::new(x, y, w.abs(), h.abs())
    }

    /// The node to commit, or `None` if the draft is no wider than `threshold`.
    pub fn commit(&self, threshold: f32) -> Option<CanvasNode> {
        let draft = self.draft();
        if draft.width <= threshold {
            return None;
        }
        let mut node = CanvasNode::from_template(self.node_type, draft.origin());
        node.width = draft.width;
        node.data.height = Some(draft.height);
        Some(node)
    }
}

// ─── Freehand ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawGesture {
    /// Canvas points in input order.
    pub points: Vec<Point>,
}

impl DrawGesture {
    pub fn commit(
        &self,
        min_points: usize,
        min_extent: f32,
        color: &str,
        stroke_width: f32,
    ) -> Option<CanvasNode> {
        if self.points.len() < min_points {
            return None;
        }
        let bbox = Bounds::enclosing(&self.points)?;
        let origin = bbox.origin();
        let payload = NodePayload::Freehand(Freehand {
            path: polyline_path(&self.points, origin),
            color: color.to_string(),
            stroke_width,
        });
        Some(CanvasNode::new(
            NodeId::with_prefix("pencil"),
            NodeType::Pencil,
            origin,
            bbox.width.max(min_extent),
            NodeData::with_height(payload, bbox.height.max(min_extent)),
        ))
    }
}

// ─── Pan ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Screen position of the pointer-down.
    pub pointer_start: Point,
    pub pan_start: Point,
}

impl PanGesture {
    pub fn pan(&self, pointer: Point) -> Point {
        self.pan_start.offset(
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        )
    }
}

// ─── Connect ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectGesture {
    pub start: NodeId,
    /// Latest canvas position.
    pub pointer: Point,
}

// ─── Slot ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragGesture),
    Resizing(ResizeGesture),
    BoxSelecting(BoxSelectGesture),
    Stamping(StampGesture),
    Drawing(DrawGesture),
    Panning(PanGesture),
    Connecting(ConnectGesture),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::Dragging(_) => "drag",
            Gesture::Resizing(_) => "resize",
            Gesture::BoxSelecting(_) => "box-select",
            Gesture::Stamping(_) => "stamp",
            Gesture::Drawing(_) => "draw",
            Gesture::Panning(_) => "pan",
            Gesture::Connecting(_) => "connect",
        }
    }

    /// Whether the surface holds pointer capture for this gesture.
    pub fn captures_pointer(&self) -> bool {
        matches!(self, Gesture::Connecting(_))
    }

    /// The node this gesture is operating on, if any.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Gesture::Dragging(g) => Some(g.node),
            Gesture::Resizing(g) => Some(g.node),
            Gesture::Connecting(g) => Some(g.start),
            _ => None,
        }
    }
}
