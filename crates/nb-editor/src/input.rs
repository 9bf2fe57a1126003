//! Input events the editor consumes from the presentation shell.

use crate::ingest::DroppedFile;

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    /// ⌘ on macOS, Ctrl elsewhere.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    pub fn cmd() -> Self {
        Modifiers {
            meta: true,
            ..Self::NONE
        }
    }

    pub fn cmd_shift() -> Self {
        Modifiers {
            meta: true,
            shift: true,
            ..Self::NONE
        }
    }
}

/// A normalized event, already converted to canvas coordinates.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Click on empty canvas.
    PaneClick { x: f32, y: f32, modifiers: Modifiers },

    /// Files dropped onto the canvas.
    Drop { x: f32, y: f32, files: Vec<DroppedFile> },

    /// Key press inside a focused node.
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    pub fn pane_click(x: f32, y: f32, modifiers: Modifiers) -> Self {
        Self::PaneClick { x, y, modifiers }
    }
}
