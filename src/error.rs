use glam::Vec3;
use thiserror::Error;

/// Errors raised while building camera state
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CameraError {
    /// The up vector is parallel to the eye -> center axis, or eye == center
    #[error("degenerate camera frame: eye {eye}, center {center}, up {up}")]
    DegenerateFrame { eye: Vec3, center: Vec3, up: Vec3 },
}
