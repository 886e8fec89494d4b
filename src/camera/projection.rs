use glam::Mat4;

use super::frame::RigidFrame;

pub const MIN_FOVY_DEGREES: f32 = 1.0;
pub const MAX_FOVY_DEGREES: f32 = 45.0;

/// Perspective parameters, zoomed by the scroll wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32, fovy_degrees: f32) -> Self {
        let mut projection = Self {
            fovy_degrees: fovy_degrees.clamp(MIN_FOVY_DEGREES, MAX_FOVY_DEGREES),
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        };
        projection.resize(width, height);
        projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Narrow (positive scroll) or widen the field of view
    pub fn zoom(&mut self, scroll: f32) {
        self.fovy_degrees = (self.fovy_degrees - scroll).clamp(MIN_FOVY_DEGREES, MAX_FOVY_DEGREES);
    }

    pub fn set_fovy(&mut self, degrees: f32) {
        self.fovy_degrees = degrees.clamp(MIN_FOVY_DEGREES, MAX_FOVY_DEGREES);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, frame: &RigidFrame) -> Mat4 {
        self.matrix() * frame.view_matrix()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(1280, 720, MAX_FOVY_DEGREES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_to_range() {
        let mut projection = Projection::default();
        projection.zoom(100.0);
        assert_eq!(projection.fovy_degrees, MIN_FOVY_DEGREES);
        projection.zoom(-100.0);
        assert_eq!(projection.fovy_degrees, MAX_FOVY_DEGREES);
        projection.zoom(5.0);
        assert_eq!(projection.fovy_degrees, 40.0);
    }

    #[test]
    fn resize_ignores_minimized_window() {
        let mut projection = Projection::new(800, 400, 45.0);
        projection.resize(0, 0);
        assert_eq!(projection.aspect, 2.0);
    }

    #[test]
    fn center_projects_to_screen_middle() {
        let frame = RigidFrame::default();
        let projection = Projection::default();
        let clip = projection.view_projection(&frame) * frame.center().extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
