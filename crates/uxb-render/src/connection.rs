//! Connection layer: edge curves between node anchors.
//!
//! Every connection is a horizontal-tangent cubic Bézier:
//!
//! ```text
//! dx = |e.x - s.x|
//! M s  C (s.x + dx/2, s.y)  (e.x - dx/2, e.y)  e
//! ```
//!
//! All coordinates are canvas space; the surface applies the viewport.

use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv, Vec2};
use uxb_core::{ANCHOR_FALLBACK_HEIGHT, Board, CanvasNode, Edge, EdgeId, NodeId, Point};

/// Where on a node's box a connection attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    Top,
    Right,
    Bottom,
    Left,
}

impl Anchor {
    /// Anchor position for `node`, using height-or-100 for the box.
    pub fn point_on(&self, node: &CanvasNode) -> Point {
        let b = node.bounds_or(ANCHOR_FALLBACK_HEIGHT);
        let c = b.center();
        match self {
            Anchor::Center => c,
            Anchor::Top => Point::new(c.x, b.y),
            Anchor::Right => Point::new(b.right(), c.y),
            Anchor::Bottom => Point::new(c.x, b.bottom()),
            Anchor::Left => Point::new(b.x, c.y),
        }
    }
}

// ─── Curve ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionCurve {
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl ConnectionCurve {
    pub fn between(start: Point, end: Point) -> Self {
        let half = (end.x - start.x).abs() / 2.0;
        Self {
            start,
            c1: Point::new(start.x + half, start.y),
            c2: Point::new(end.x - half, end.y),
            end,
        }
    }

    /// SVG path data: `M sx sy C c1x c1y c2x c2y ex ey`.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {} {} {} {} {}",
            self.start.x,
            self.start.y,
            self.c1.x,
            self.c1.y,
            self.c2.x,
            self.c2.y,
            self.end.x,
            self.end.y
        )
    }

    pub fn to_bez(&self) -> CubicBez {
        CubicBez::new(
            to_kurbo(self.start),
            to_kurbo(self.c1),
            to_kurbo(self.c2),
            to_kurbo(self.end),
        )
    }

    /// Point at parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        from_kurbo(self.to_bez().eval(t))
    }

    /// Triangle for an arrowhead of `length` × `width` whose tip sits on the
    /// curve end, oriented along the end tangent.
    pub fn arrowhead(&self, length: f32, width: f32) -> [Point; 3] {
        let bez = self.to_bez();
        let mut dir: Vec2 = bez.deriv().eval(1.0).to_vec2();
        if dir.hypot() < f64::EPSILON {
            dir = bez.p3 - bez.p0;
        }
        if dir.hypot() < f64::EPSILON {
            dir = Vec2::new(1.0, 0.0);
        }
        let dir = dir.normalize();
        let normal = Vec2::new(-dir.y, dir.x);
        let tip = bez.p3;
        let base = tip - dir * f64::from(length);
        let half = normal * f64::from(width / 2.0);
        [
            from_kurbo(base + half),
            from_kurbo(tip),
            from_kurbo(base - half),
        ]
    }
}

fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(f64::from(p.x), f64::from(p.y))
}

fn from_kurbo(p: kurbo::Point) -> Point {
    Point::new(p.x as f32, p.y as f32)
}

// ─── Style ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub stroke: &'static str,
    pub width: f32,
    pub dash: Option<&'static str>,
    pub arrow_fill: &'static str,
}

/// Marker size of the arrowhead (length, width).
pub const ARROWHEAD_SIZE: (f32, f32) = (10.0, 7.0);

pub const COMMITTED_STYLE: EdgeStyle = EdgeStyle {
    stroke: "#94a3b8",
    width: 2.0,
    dash: None,
    arrow_fill: "#94a3b8",
};

pub const PREVIEW_STYLE: EdgeStyle = EdgeStyle {
    stroke: "black",
    width: 3.0,
    dash: Some("4 4"),
    arrow_fill: "#3b82f6",
};

// ─── Layer ───────────────────────────────────────────────────────────────

/// One drawable connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPath {
    /// `None` for the in-progress preview.
    pub edge: Option<EdgeId>,
    pub curve: ConnectionCurve,
    pub style: EdgeStyle,
}

impl ConnectionPath {
    pub fn arrowhead(&self) -> [Point; 3] {
        self.curve.arrowhead(ARROWHEAD_SIZE.0, ARROWHEAD_SIZE.1)
    }
}

/// Curve for a committed edge. `None` if either end has left the board.
pub fn edge_curve(board: &Board, edge: &Edge) -> Option<ConnectionCurve> {
    let start = board.get(edge.start)?;
    let end = board.get(edge.end)?;
    Some(ConnectionCurve::between(
        Anchor::Center.point_on(start),
        Anchor::Center.point_on(end),
    ))
}

/// Every committed edge, centre to centre.
pub fn connection_layer(board: &Board) -> Vec<ConnectionPath> {
    board
        .edges()
        .filter_map(|edge| {
            let curve = edge_curve(board, edge)?;
            Some(ConnectionPath {
                edge: Some(edge.id),
                curve,
                style: COMMITTED_STYLE,
            })
        })
        .collect()
}

/// The dashed line from the start node's centre to the pointer while a
/// connection gesture is active.
pub fn preview_path(board: &Board, start: NodeId, pointer: Point) -> Option<ConnectionPath> {
    let node = board.get(start)?;
    Some(ConnectionPath {
        edge: None,
        curve: ConnectionCurve::between(Anchor::Center.point_on(node), pointer),
        style: PREVIEW_STYLE,
    })
}
