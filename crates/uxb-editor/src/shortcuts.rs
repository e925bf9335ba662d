//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//!
//! - Single letters pick a tool (`v h d t s c e`)
//! - Space held = temporary pan, released on key-up
//! - ⌘/Ctrl combos drive the view (`=`/`+`, `-`, `0`) and select-all
//!
//! The engine drops every shortcut while a text field inside a node has
//! focus, so typing into a card never switches tools.

use crate::tools::ToolMode;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    ToolSelect,
    ToolPan,
    ToolDraw,
    ToolText,
    ToolShape,
    ToolCircle,
    ToolEraser,

    // ── Edit ──
    Delete,
    SelectAll,

    // ── View ──
    ZoomIn,
    ZoomOut,
    ZoomToFit,
    PanStart,
    PanEnd,

    // ── UI ──
    /// Cancel the active gesture, or clear the selection when idle.
    Cancel,
}

impl ShortcutAction {
    /// Tool selected by a tool-switching action.
    pub fn tool(&self) -> Option<ToolMode> {
        match self {
            ShortcutAction::ToolSelect => Some(ToolMode::Select),
            ShortcutAction::ToolPan => Some(ToolMode::Pan),
            ShortcutAction::ToolDraw => Some(ToolMode::Draw),
            ShortcutAction::ToolText => Some(ToolMode::Text),
            ShortcutAction::ToolShape => Some(ToolMode::Shape),
            ShortcutAction::ToolCircle => Some(ToolMode::Circle),
            ShortcutAction::ToolEraser => Some(ToolMode::Eraser),
            _ => None,
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key-down to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"v"`, `"Delete"`, `" "`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        _shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        // Shift is ignored so ⌘+ (Shift+=) still zooms in.
        if cmd {
            return match key {
                "=" | "+" => Some(ShortcutAction::ZoomIn),
                "-" => Some(ShortcutAction::ZoomOut),
                "0" => Some(ShortcutAction::ZoomToFit),
                "a" | "A" => Some(ShortcutAction::SelectAll),
                _ => None,
            };
        }

        // ── Single keys ──
        match key {
            "v" | "V" => Some(ShortcutAction::ToolSelect),
            "h" | "H" => Some(ShortcutAction::ToolPan),
            "d" | "D" => Some(ShortcutAction::ToolDraw),
            "t" | "T" => Some(ShortcutAction::ToolText),
            "s" | "S" => Some(ShortcutAction::ToolShape),
            "c" | "C" => Some(ShortcutAction::ToolCircle),
            "e" | "E" => Some(ShortcutAction::ToolEraser),
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Cancel),
            " " => Some(ShortcutAction::PanStart),
            _ => None,
        }
    }

    /// Resolve a key-up. Only Space has a release binding.
    pub fn resolve_release(key: &str) -> Option<ShortcutAction> {
        match key {
            " " => Some(ShortcutAction::PanEnd),
            _ => None,
        }
    }
}
