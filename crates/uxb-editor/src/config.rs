//! Engine tuning knobs.
//!
//! Every field has a default; a partial config (e.g. from JSON) only needs
//! the values it overrides.

use serde::{Deserialize, Serialize};
use uxb_core::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Zoom factor per wheel notch. Default: **1.08**.
    pub wheel_zoom_factor: f32,
    /// Zoom factor for zoom-in/out buttons and shortcuts. Default: **1.2**.
    pub zoom_step: f32,
    /// Smallest width/height a resize can produce. Default: **20**.
    pub min_resize: f32,
    /// A stamped shape narrower than this is discarded. Default: **5**.
    pub stamp_threshold: f32,
    /// Freehand strokes with fewer points are discarded. Default: **3**.
    pub freehand_min_points: usize,
    /// Smallest freehand box side. Default: **10**.
    pub freehand_min_extent: f32,
    /// Screen padding around content for fit-to-screen. Default: **80**.
    pub fit_padding: f32,
    /// Fit-to-screen never zooms in past this. Default: **1.5**.
    pub fit_max_zoom: f32,
    /// A dropped template's top sits this far above the drop centre. Default: **100**.
    pub drop_offset_y: f32,
    /// A placed text node's top sits this far above the click. Default: **10**.
    pub text_offset_y: f32,
    /// Background dot spacing in canvas units. Default: **24**.
    pub grid_spacing: f32,
    pub default_viewport: Viewport,
    /// Pencil colour. Default: **#1a1a2e**.
    pub stroke_color: String,
    /// Pencil width. Default: **4**.
    pub stroke_width: f32,
    /// Colour given to placed text nodes. Default: **bg-blue-500**.
    pub text_color: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_factor: 1.08,
            zoom_step: 1.2,
            min_resize: 20.0,
            stamp_threshold: 5.0,
            freehand_min_points: 3,
            freehand_min_extent: 10.0,
            fit_padding: 80.0,
            fit_max_zoom: 1.5,
            drop_offset_y: 100.0,
            text_offset_y: 10.0,
            grid_spacing: 24.0,
            default_viewport: Viewport::default(),
            stroke_color: uxb_core::registry::DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: uxb_core::registry::DEFAULT_STROKE_WIDTH,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

/// Default colour for placed text, first entry of the toolbar palette.
pub const DEFAULT_TEXT_COLOR: &str = "bg-blue-500";

/// Stroke colours offered by the drawing toolbar.
pub const STROKE_PALETTE: [&str; 4] = ["#1a1a2e", "#e74c3c", "#2ecc71", "#3498db"];
