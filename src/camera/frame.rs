use glam::{Mat4, Quat, Vec3};

use crate::error::CameraError;

/// Rigid camera frame: eye position, look-at center and a unit up vector
///
/// `front` and `left` are derived on demand. `up` is kept orthogonal to the
/// view axis after construction and after every rotation, so small per-frame
/// rotations can accumulate for a whole session without skewing the basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidFrame {
    eye: Vec3,
    center: Vec3,
    up: Vec3,
}

impl RigidFrame {
    /// Build a frame, re-deriving `up` so that it is orthogonal to `center - eye`
    ///
    /// Fails when `up` is parallel to the view axis or `eye == center`.
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Result<Self, CameraError> {
        let front = center - eye;
        let left = up.cross(front);
        let up = front
            .cross(left)
            .try_normalize()
            .ok_or(CameraError::DegenerateFrame { eye, center, up })?;

        Ok(Self { eye, center, up })
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        self.view_vector().normalize()
    }

    /// Unit direction to the camera's left
    pub fn left(&self) -> Vec3 {
        self.up.cross(self.view_vector()).normalize()
    }

    /// Unnormalized `center - eye`
    pub fn view_vector(&self) -> Vec3 {
        self.center - self.eye
    }

    /// Distance between eye and center
    pub fn distance(&self) -> f32 {
        self.view_vector().length()
    }

    /// Right-handed look-at matrix for the renderer
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }

    /// Translate eye and center along the local axes
    pub fn move_local(&mut self, truck_left: f32, pedestal_up: f32, dolly_in: f32) {
        let translation =
            truck_left * self.left() + pedestal_up * self.up + dolly_in * self.front();
        self.eye += translation;
        self.center += translation;
    }

    pub fn truck_left(&mut self, offset: f32) {
        self.move_local(offset, 0.0, 0.0);
    }

    pub fn pedestal_up(&mut self, offset: f32) {
        self.move_local(0.0, offset, 0.0);
    }

    pub fn dolly_in(&mut self, offset: f32) {
        self.move_local(0.0, 0.0, offset);
    }

    /// Roll about front, then tilt about the new left, then pan about the new up
    ///
    /// Each axis is taken from the output of the previous step, so the three
    /// angles do not commute.
    pub fn rotate_local(&mut self, roll_right: f32, tilt_down: f32, pan_left: f32) {
        let front = self.view_vector();

        let up = rotate(self.up, front, roll_right);

        let left = up.cross(front);
        let front = rotate(front, left, tilt_down);
        let up = rotate(up, left, tilt_down);

        let front = rotate(front, up, pan_left);

        self.center = self.eye + front;
        self.up = orthonormalize(front, up, self.up);
    }

    pub fn roll_right(&mut self, radians: f32) {
        self.rotate_local(radians, 0.0, 0.0);
    }

    pub fn tilt_down(&mut self, radians: f32) {
        self.rotate_local(0.0, radians, 0.0);
    }

    pub fn pan_left(&mut self, radians: f32) {
        self.rotate_local(0.0, 0.0, radians);
    }

    /// Rotate front and up about a fixed world-space axis, keeping the eye in place
    pub fn rotate_world(&mut self, radians: f32, axis: Vec3) {
        let front = rotate(self.view_vector(), axis, radians);
        let up = rotate(self.up, axis, radians);

        self.center = self.eye + front;
        self.up = orthonormalize(front, up, self.up);
    }
}

impl Default for RigidFrame {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            center: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

/// Rotate `v` about `axis`; a zero axis is the identity
pub(super) fn rotate(v: Vec3, axis: Vec3, radians: f32) -> Vec3 {
    match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, radians) * v,
        None => v,
    }
}

/// Component of `up` orthogonal to `front`, normalized
fn orthonormalize(front: Vec3, up: Vec3, previous: Vec3) -> Vec3 {
    front.cross(up.cross(front)).try_normalize().unwrap_or(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(frame: &RigidFrame) {
        assert!((frame.up().length() - 1.0).abs() < EPS, "up not unit: {}", frame.up());
        assert!(frame.up().dot(frame.front()).abs() < EPS, "up not orthogonal to front");
        assert!(frame.left().dot(frame.front()).abs() < EPS);
    }

    #[test]
    fn new_reorthogonalizes_up() {
        let frame = RigidFrame::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::new(0.0, 1.0, 1.0))
            .unwrap();
        assert!(frame.up().abs_diff_eq(Vec3::Y, EPS));
        assert_orthonormal(&frame);
    }

    #[test]
    fn new_rejects_up_parallel_to_view_axis() {
        let result = RigidFrame::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Vec3::Y);
        assert!(matches!(result, Err(CameraError::DegenerateFrame { .. })));
    }

    #[test]
    fn new_rejects_coincident_eye_and_center() {
        let result = RigidFrame::new(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert!(result.is_err());
    }

    #[test]
    fn default_frame_looks_down_negative_z() {
        let frame = RigidFrame::default();
        assert_eq!(frame.front(), Vec3::NEG_Z);
        assert_eq!(frame.up(), Vec3::Y);
        assert!(frame.left().abs_diff_eq(Vec3::NEG_X, EPS));
    }

    #[test]
    fn move_local_translates_eye_and_center_together() {
        let mut frame = RigidFrame::default();
        let before = frame;
        frame.move_local(1.0, 2.0, 3.0);

        let shift = frame.eye() - before.eye();
        assert!(shift.abs_diff_eq(Vec3::new(-1.0, 2.0, -3.0), EPS));
        assert!((frame.center() - before.center()).abs_diff_eq(shift, EPS));
        assert!(frame.front().abs_diff_eq(before.front(), EPS));
        assert!(frame.left().abs_diff_eq(before.left(), EPS));
        assert_eq!(frame.up(), before.up());
    }

    #[test]
    fn roll_rotates_up_about_front() {
        let mut frame = RigidFrame::default();
        frame.roll_right(FRAC_PI_2);
        // Looking down -Z, a quarter turn about the view axis takes +Y to +X.
        assert!(frame.up().abs_diff_eq(Vec3::X, EPS));
        assert!(frame.front().abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn tilt_moves_center_and_up() {
        let mut frame = RigidFrame::default();
        frame.tilt_down(FRAC_PI_2);
        assert!(frame.front().abs_diff_eq(Vec3::NEG_Y, EPS));
        assert!(frame.up().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert_eq!(frame.eye(), Vec3::ZERO);
    }

    #[test]
    fn pan_keeps_up() {
        let mut frame = RigidFrame::default();
        frame.pan_left(FRAC_PI_2);
        assert!(frame.front().abs_diff_eq(Vec3::NEG_X, EPS));
        assert!(frame.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn rotate_local_is_order_dependent() {
        let mut a = RigidFrame::default();
        a.rotate_local(0.3, 0.4, 0.5);

        let mut b = RigidFrame::default();
        b.pan_left(0.5);
        b.tilt_down(0.4);
        b.roll_right(0.3);

        assert!(!a.front().abs_diff_eq(b.front(), 1e-3));
    }

    #[test]
    fn rotate_world_quarter_turn_about_y() {
        let mut frame = RigidFrame::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y).unwrap();
        frame.rotate_world(FRAC_PI_2, Vec3::Y);
        assert!(frame.front().abs_diff_eq(Vec3::NEG_X, EPS));
        assert!(frame.up().abs_diff_eq(Vec3::Y, EPS));
        assert!((frame.distance() - 5.0).abs() < EPS);
    }

    #[test]
    fn rotate_world_with_zero_axis_is_identity() {
        let mut frame = RigidFrame::default();
        let before = frame;
        frame.rotate_world(1.0, Vec3::ZERO);
        assert_eq!(frame, before);
    }

    #[test]
    fn view_matrix_maps_center_onto_negative_z() {
        let frame = RigidFrame::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y).unwrap();
        let center_in_view = frame.view_matrix().transform_point3(frame.center());
        assert!(center_in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), EPS));
    }
}
