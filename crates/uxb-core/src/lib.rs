pub mod board;
pub mod error;
pub mod geometry;
pub mod id;
pub mod model;
pub mod registry;

pub use board::{Board, ZCounter};
pub use error::{EditorError, EditorResult};
pub use geometry::{Bounds, MAX_ZOOM, MIN_ZOOM, Point, Size, Viewport, clamp_zoom};
pub use id::{EdgeId, NodeId};
pub use model::*;
pub use registry::{Category, palette};
