//! Screen ↔ canvas coordinate transforms.
//!
//! Screen space is pixels inside the viewport container (top-left = 0,0).
//! Canvas space is the unbounded logical plane nodes live on. A `Viewport`
//! (pan offset in screen pixels + zoom scalar) defines the affine map:
//!
//! ```text
//! screen = canvas * zoom + pan
//! canvas = (screen - pan) / zoom
//! ```

use serde::{Deserialize, Serialize};

/// Smallest allowed zoom. All scaling divides by zoom, so it must stay positive.
pub const MIN_ZOOM: f32 = 0.15;
/// Largest allowed zoom.
pub const MAX_ZOOM: f32 = 3.0;

/// A 2D point. Which space it lives in is decided by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width × height of a container or box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Size {
    /// Fallback container size when the host has not reported one yet.
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

/// Axis-aligned bounding box: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized box spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self::new(left, top, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Tight box around a set of points. `None` for an empty set.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive point containment (edges count as inside).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Strict AABB overlap: boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Bounds::new(left, top, right - left, bottom - top)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Pan offset (screen pixels) + zoom scalar.
///
/// Deserialising goes through `Viewport::new`, so a stored zoom of 0 or a
/// negative zoom comes back clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawViewport")]
pub struct Viewport {
    pub pan_x: f32,
    pub pan_y: f32,
    pub zoom: f32,
}

#[derive(Deserialize)]
struct RawViewport {
    pan_x: f32,
    pan_y: f32,
    zoom: f32,
}

impl From<RawViewport> for Viewport {
    fn from(raw: RawViewport) -> Self {
        Viewport::new(raw.pan_x, raw.pan_y, raw.zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 40.0,
            pan_y: 40.0,
            zoom: 1.0,
        }
    }
}

/// Clamp a zoom value into `[MIN_ZOOM, MAX_ZOOM]`. Non-finite input maps to 1.0.
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        1.0
    }
}

impl Viewport {
    /// Build a viewport, clamping zoom into the legal range.
    pub fn new(pan_x: f32, pan_y: f32, zoom: f32) -> Self {
        Self {
            pan_x,
            pan_y,
            zoom: clamp_zoom(zoom),
        }
    }

    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    pub fn screen_to_canvas(&self, p: Point) -> Point {
        Point::new((p.x - self.pan_x) / self.zoom, (p.y - self.pan_y) / self.zoom)
    }

    pub fn canvas_to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.pan_x, p.y * self.zoom + self.pan_y)
    }

    /// Convert a screen-space box to canvas space in one step.
    pub fn screen_rect_to_canvas(&self, rect: Bounds) -> Bounds {
        let origin = self.screen_to_canvas(rect.origin());
        Bounds::new(
            origin.x,
            origin.y,
            rect.width / self.zoom,
            rect.height / self.zoom,
        )
    }

    /// Same zoom, new pan.
    pub fn with_pan(&self, pan: Point) -> Self {
        Self {
            pan_x: pan.x,
            pan_y: pan.y,
            zoom: self.zoom,
        }
    }

    /// Zoom by `factor` keeping the canvas point under `anchor` (screen space) fixed.
    ///
    /// `pan' = anchor - (anchor - pan) * f` where `f` is the factor actually
    /// applied after clamping, so the anchor stays put even at the limits.
    pub fn zoom_at(&self, anchor: Point, factor: f32) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return *self;
        }
        let zoom = clamp_zoom(self.zoom * factor);
        let applied = zoom / self.zoom;
        Self {
            pan_x: anchor.x - (anchor.x - self.pan_x) * applied,
            pan_y: anchor.y - (anchor.y - self.pan_y) * applied,
            zoom,
        }
    }

    /// Choose a viewport that shows `content` (canvas space) inside
    /// `container` with `padding` pixels on every side.
    ///
    /// `None` content yields the default viewport.
    pub fn fit(content: Option<Bounds>, container: Size, padding: f32, max_zoom: f32) -> Self {
        let Some(content) = content else {
            return Self::default();
        };
        let avail_w = container.width - padding * 2.0;
        let avail_h = container.height - padding * 2.0;
        let scale_x = if content.width > 0.0 {
            avail_w / content.width
        } else {
            f32::INFINITY
        };
        let scale_y = if content.height > 0.0 {
            avail_h / content.height
        } else {
            f32::INFINITY
        };
        let zoom = clamp_zoom(scale_x.min(scale_y).min(max_zoom));

        let pan_x = (container.width - content.width * zoom) / 2.0 - content.x * zoom;
        let pan_y = (container.height - content.height * zoom) / 2.0 - content.y * zoom;
        Self { pan_x, pan_y, zoom }
    }
}
