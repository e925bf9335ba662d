pub mod config;
pub mod engine;
pub mod gesture;
pub mod input;
pub mod mutation;
pub mod selection;
pub mod shortcuts;
pub mod tools;

pub use config::{EditorConfig, STROKE_PALETTE};
pub use engine::{CanvasEngine, Outcome, SurfaceRequest};
pub use gesture::{Gesture, Handle};
pub use input::{InputEvent, Modifiers, PointerButton};
pub use mutation::BoardMutation;
pub use selection::Selection;
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::{ToolMode, ToolState};
