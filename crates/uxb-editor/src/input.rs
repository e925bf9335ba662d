//! Input abstraction layer.
//!
//! Normalizes pointer, wheel and keyboard events from the host surface into
//! a unified `InputEvent` consumed by `CanvasEngine`. All positions are
//! screen pixels relative to the canvas container's top-left corner.

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// ⌘ on macOS, Ctrl elsewhere.
    pub fn cmd(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index.
    pub fn from_index(button: i16) -> Self {
        match button {
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        }
    }
}

/// A normalized input event from the canvas surface.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
        modifiers: Modifiers,
    },

    PointerMove {
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    PointerUp {
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    /// Pointer left the canvas container without capture.
    PointerLeave,

    /// Wheel notch. `delta_y < 0` scrolls up (zoom in).
    Wheel { x: f32, y: f32, delta_y: f32 },

    KeyDown {
        key: String,
        modifiers: Modifiers,
        /// A text field inside a node has keyboard focus.
        text_input_focused: bool,
    },

    KeyUp { key: String },
}

impl InputEvent {
    pub fn pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            modifiers: Modifiers::NONE,
            text_input_focused: false,
        }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y, .. }
            | Self::Wheel { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }
}
