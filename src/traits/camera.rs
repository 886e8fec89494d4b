use super::input::InputSource;
use crate::camera::RigidFrame;

/// Camera navigation abstraction: turns per-tick input into frame transforms
pub trait CameraController {
    /// Advance by `elapsed` seconds; returns true if the camera moved
    fn update(&mut self, elapsed: f32, input: &dyn InputSource) -> bool;

    /// Snapshot of the held frame
    fn camera(&self) -> RigidFrame;

    /// Replace the held frame
    fn set_camera(&mut self, frame: RigidFrame);
}
