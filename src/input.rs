//! Input model: mouse buttons, cursor affordance, and the drag state machine.
//!
//! `InputState` tracks the gesture between pointer-down and pointer-up. A
//! press that lands on a control point drags it immediately; a press that
//! lands on empty space waits, and grabs the first control point the pointer
//! moves onto while the button is still held.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.buttons` bitmask. Only a single pressed button
    /// maps to a variant; chords and an empty mask yield `None`.
    #[must_use]
    pub fn from_buttons(mask: u16) -> Option<Self> {
        match mask {
            1 => Some(Self::Primary),
            2 => Some(Self::Secondary),
            4 => Some(Self::Middle),
            _ => None,
        }
    }
}

/// Pointer cursor shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Shown while a control point is under the pointer or being dragged.
    Pointer,
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
        }
    }
}

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No button held.
    #[default]
    Idle,
    /// Primary button held over empty space; no point grabbed yet.
    Pressed,
    /// Primary button held with a control point grabbed.
    Dragging {
        /// Index of the control point following the pointer.
        index: usize,
    },
}

impl InputState {
    /// Whether the primary button is currently held.
    #[must_use]
    pub fn is_pressed(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The control point being dragged, if any.
    #[must_use]
    pub fn dragging(self) -> Option<usize> {
        match self {
            Self::Dragging { index } => Some(index),
            Self::Idle | Self::Pressed => None,
        }
    }
}
