use glam::Vec2;

use crate::traits::{Button, InputSource};

/// Button that starts a drag gesture
pub const DRAG_BUTTON: Button = Button::MouseMiddle;

/// Idle/Dragging state shared by the controllers
///
/// Entering the dragging state samples the cursor as the reference point;
/// leaving it does nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    dragging: bool,
    last_cursor: Vec2,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Cursor movement since the previous sample, zero while idle
    pub fn sample(&mut self, input: &dyn InputSource) -> Vec2 {
        let pressed = input.is_down(DRAG_BUTTON);

        if pressed && !self.dragging {
            self.dragging = true;
            self.last_cursor = input.cursor_position();
        } else if !pressed && self.dragging {
            self.dragging = false;
        }

        if !self.dragging {
            return Vec2::ZERO;
        }

        let cursor = input.cursor_position();
        let delta = cursor - self.last_cursor;
        self.last_cursor = cursor;
        delta
    }
}
