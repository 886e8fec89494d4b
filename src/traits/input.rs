use glam::Vec2;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    ArrowUp,
    ArrowDown,
    ShiftLeft,
    ControlLeft,
    MouseLeft,
    MouseMiddle,
    MouseRight,
}

/// Snapshot access to the input devices, polled once per tick
pub trait InputSource {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Current cursor position in window coordinates
    fn cursor_position(&self) -> Vec2;
}
