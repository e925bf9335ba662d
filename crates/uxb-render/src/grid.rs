//! Dot-grid background.
//!
//! The grid lives in canvas space: dots sit every `base_spacing` canvas
//! units, so on screen the spacing scales with zoom and the pattern is
//! shifted by the pan offset.

use uxb_core::{Point, Size, Viewport};

pub const GRID_DOT_COLOR: &str = "#d1d5db";
pub const GRID_BACKGROUND: &str = "#f8f8fa";
/// Dot radius in screen pixels. Does not scale with zoom.
pub const GRID_DOT_RADIUS: f32 = 1.0;

/// Screen-space description of the background pattern for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Distance between dots in screen pixels.
    pub spacing: f32,
    /// Position of the first dot, in `[0, spacing)` on each axis.
    pub offset: Point,
    pub dot_radius: f32,
    pub dot_color: &'static str,
    pub background: &'static str,
}

impl GridSpec {
    pub fn for_viewport(viewport: &Viewport, base_spacing: f32) -> Self {
        let spacing = base_spacing * viewport.zoom;
        let offset = if spacing > 0.0 && spacing.is_finite() {
            Point::new(viewport.pan_x.rem_euclid(spacing), viewport.pan_y.rem_euclid(spacing))
        } else {
            Point::ORIGIN
        };
        Self {
            spacing,
            offset,
            dot_radius: GRID_DOT_RADIUS,
            dot_color: GRID_DOT_COLOR,
            background: GRID_BACKGROUND,
        }
    }

    /// Every dot centre visible inside `container`.
    pub fn dots(&self, container: Size) -> Vec<Point> {
        if self.spacing.is_nan() || self.spacing <= 0.0 {
            return Vec::new();
        }
        let cols = (container.width / self.spacing).ceil().max(0.0) as usize;
        let rows = (container.height / self.spacing).ceil().max(0.0) as usize;
        let mut dots = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            let y = self.offset.y + row as f32 * self.spacing;
            if y > container.height {
                break;
            }
            for col in 0..cols {
                let x = self.offset.x + col as f32 * self.spacing;
                if x > container.width {
                    break;
                }
                dots.push(Point::new(x, y));
            }
        }
        dots
    }
}
