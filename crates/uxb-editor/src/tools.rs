//! Tool modes.
//!
//! The active tool decides how a pointer-down on the canvas is interpreted.
//! Holding Space temporarily overrides any tool with `Pan`; releasing it
//! restores the selected tool.
//!
//! | Tool | Pointer-down on node | Pointer-down on empty canvas |
//! |------|----------------------|------------------------------|
//! | Select | drag | box-select |
//! | Pan | pan | pan |
//! | Draw | freehand | freehand |
//! | Text | place text | place text |
//! | Shape / Circle | stamp | stamp |
//! | Eraser | delete node | nothing |

use serde::{Deserialize, Serialize};
use uxb_core::NodeType;
use uxb_render::CursorHint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    #[default]
    Select,
    Pan,
    Draw,
    Text,
    Shape,
    Circle,
    Eraser,
}

impl ToolMode {
    /// Node type a stamping tool creates.
    pub fn stamp_type(&self) -> Option<NodeType> {
        match self {
            ToolMode::Shape => Some(NodeType::SimpleShape),
            ToolMode::Circle => Some(NodeType::SimpleCircle),
            _ => None,
        }
    }
}

/// Selected tool plus the transient Space override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    selected: ToolMode,
    space_held: bool,
}

impl ToolState {
    pub fn selected(&self) -> ToolMode {
        self.selected
    }

    /// The mode that actually handles input right now.
    pub fn effective(&self) -> ToolMode {
        if self.space_held {
            ToolMode::Pan
        } else {
            self.selected
        }
    }

    /// Returns `true` if the selected tool changed.
    pub fn set(&mut self, mode: ToolMode) -> bool {
        let changed = self.selected != mode;
        self.selected = mode;
        changed
    }

    /// Returns `true` if the effective mode changed.
    pub fn set_space_held(&mut self, held: bool) -> bool {
        let before = self.effective();
        self.space_held = held;
        before != self.effective()
    }

    pub fn space_held(&self) -> bool {
        self.space_held
    }

    /// Cursor for the effective mode. `panning` picks the closed hand.
    pub fn cursor(&self, panning: bool) -> CursorHint {
        match self.effective() {
            ToolMode::Pan if panning => CursorHint::Grabbing,
            ToolMode::Pan => CursorHint::Grab,
            ToolMode::Draw => CursorHint::Crosshair,
            ToolMode::Shape | ToolMode::Text | ToolMode::Circle => CursorHint::Text,
            ToolMode::Eraser => CursorHint::Alias,
            ToolMode::Select => CursorHint::Default,
        }
    }
}
