use glam::Vec3;
use log::debug;

use super::drag::DragTracker;
use super::frame::{rotate, RigidFrame};
use crate::traits::{Button, CameraController, InputSource};

pub const PAN_SENSITIVITY: f32 = 0.01;
pub const ZOOM_SENSITIVITY: f32 = 0.01;
pub const ORBIT_SENSITIVITY: f32 = 0.01;

/// Closest the eye may get to the center while zooming
pub const MIN_ZOOM_DISTANCE: f32 = 1e-4;

pub const PAN_MODIFIER: Button = Button::ShiftLeft;
pub const ZOOM_MODIFIER: Button = Button::ControlLeft;

/// Orbit/pan/zoom around the frame's center
#[derive(Debug, Clone)]
pub struct TrackballController {
    speed: f32,
    world_up: Vec3,
    frame: RigidFrame,
    drag: DragTracker,
}

impl TrackballController {
    pub fn new(speed: f32, world_up: Vec3) -> Self {
        Self {
            speed: speed.max(0.0),
            world_up,
            frame: RigidFrame::default(),
            drag: DragTracker::default(),
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Adjust speed by `delta`, never going below zero
    pub fn increase_speed(&mut self, delta: f32) {
        self.set_speed(self.speed + delta);
    }

    pub fn world_up_axis(&self) -> Vec3 {
        self.world_up
    }

    pub fn set_world_up_axis(&mut self, axis: Vec3) {
        self.world_up = axis;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    fn pan(&mut self, dx: f32, dy: f32) -> bool {
        let truck_left = PAN_SENSITIVITY * dx;
        let pedestal_up = PAN_SENSITIVITY * dy;
        if truck_left == 0.0 && pedestal_up == 0.0 {
            return false;
        }

        self.frame.move_local(truck_left, pedestal_up, 0.0);
        true
    }

    fn zoom(&mut self, dx: f32) -> bool {
        let mut offset = ZOOM_SENSITIVITY * dx;
        if offset == 0.0 {
            return false;
        }

        let view = self.frame.view_vector();
        let distance = view.length();
        if offset > 0.0 {
            offset = offset.min(distance - MIN_ZOOM_DISTANCE);
        }

        let eye = self.frame.eye() + offset * (view / distance);
        let center = self.frame.center();

        match RigidFrame::new(eye, center, self.world_up) {
            Ok(frame) => {
                self.frame = frame;
                true
            }
            Err(err) => {
                debug!("trackball zoom rejected: {err}");
                false
            }
        }
    }

    fn orbit(&mut self, dx: f32, dy: f32) -> bool {
        let longitude = ORBIT_SENSITIVITY * dy;
        let latitude = -ORBIT_SENSITIVITY * dx;
        if longitude == 0.0 && latitude == 0.0 {
            return false;
        }

        let depth = self.frame.eye() - self.frame.center();
        let depth = rotate(depth, self.frame.left(), longitude);
        let depth = rotate(depth, self.world_up, latitude);

        let center = self.frame.center();
        match RigidFrame::new(center + depth, center, self.world_up) {
            Ok(frame) => {
                self.frame = frame;
                true
            }
            Err(err) => {
                debug!("trackball orbit rejected: {err}");
                false
            }
        }
    }
}

impl Default for TrackballController {
    fn default() -> Self {
        Self::new(1.0, Vec3::Y)
    }
}

impl CameraController for TrackballController {
    fn update(&mut self, _elapsed: f32, input: &dyn InputSource) -> bool {
        let delta = self.drag.sample(input);

        if input.is_down(PAN_MODIFIER) {
            self.pan(delta.x, delta.y)
        } else if input.is_down(ZOOM_MODIFIER) {
            self.zoom(delta.x)
        } else {
            self.orbit(delta.x, delta.y)
        }
    }

    fn camera(&self) -> RigidFrame {
        self.frame
    }

    fn set_camera(&mut self, frame: RigidFrame) {
        self.frame = frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::cell::Cell;

    struct Scripted {
        held: Vec<Button>,
        cursor: Cell<Vec2>,
    }

    impl Scripted {
        fn holding(held: &[Button]) -> Self {
            Self { held: held.to_vec(), cursor: Cell::new(Vec2::ZERO) }
        }

        fn move_to(&self, x: f32, y: f32) {
            self.cursor.set(Vec2::new(x, y));
        }
    }

    impl InputSource for Scripted {
        fn is_down(&self, button: Button) -> bool {
            self.held.contains(&button)
        }

        fn cursor_position(&self) -> Vec2 {
            self.cursor.get()
        }
    }

    fn looking_at_origin_from(distance: f32) -> TrackballController {
        let mut trackball = TrackballController::default();
        trackball.set_camera(
            RigidFrame::new(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, Vec3::Y).unwrap(),
        );
        trackball
    }

    #[test]
    fn pan_translates_frame() {
        let mut trackball = looking_at_origin_from(5.0);
        let input = Scripted::holding(&[Button::MouseMiddle, Button::ShiftLeft]);

        assert!(!trackball.update(0.016, &input));
        input.move_to(100.0, 0.0);
        assert!(trackball.update(0.016, &input));

        let frame = trackball.camera();
        // Looking down -Z from +Z, left is -X.
        assert!(frame.eye().abs_diff_eq(Vec3::new(-1.0, 0.0, 5.0), 1e-5));
        assert!(frame.center().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn zoom_out_moves_eye_away() {
        let mut trackball = looking_at_origin_from(3.0);
        let input = Scripted::holding(&[Button::MouseMiddle, Button::ControlLeft]);

        trackball.update(0.016, &input);
        input.move_to(-200.0, 0.0);
        assert!(trackball.update(0.016, &input));
        assert!((trackball.camera().distance() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_ignores_vertical_motion() {
        let mut trackball = looking_at_origin_from(3.0);
        let input = Scripted::holding(&[Button::MouseMiddle, Button::ControlLeft]);

        trackball.update(0.016, &input);
        input.move_to(0.0, 50.0);
        assert!(!trackball.update(0.016, &input));
    }

    #[test]
    fn orbit_keeps_distance_to_center() {
        let mut trackball = looking_at_origin_from(4.0);
        let input = Scripted::holding(&[Button::MouseMiddle]);

        trackball.update(0.016, &input);
        input.move_to(37.0, -21.0);
        assert!(trackball.update(0.016, &input));

        let frame = trackball.camera();
        assert_eq!(frame.center(), Vec3::ZERO);
        assert!((frame.distance() - 4.0).abs() < 1e-4);
        assert!(frame.up().dot(frame.front()).abs() < 1e-5);
    }

    #[test]
    fn horizontal_orbit_rotates_about_world_up() {
        let mut trackball = looking_at_origin_from(4.0);
        let input = Scripted::holding(&[Button::MouseMiddle]);

        trackball.update(0.016, &input);
        // latitude = -0.01 * dx = -pi/2
        input.move_to(std::f32::consts::FRAC_PI_2 * 100.0, 0.0);
        trackball.update(0.016, &input);

        assert!(trackball.camera().eye().abs_diff_eq(Vec3::new(-4.0, 0.0, 0.0), 1e-4));
    }

    fn looking_down_world_up() -> TrackballController {
        let mut trackball = TrackballController::default();
        trackball.set_camera(RigidFrame::new(Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO, Vec3::Z).unwrap());
        trackball
    }

    #[test]
    fn degenerate_orbit_keeps_frame() {
        let mut trackball = looking_down_world_up();
        let before = trackball.camera();
        let input = Scripted::holding(&[Button::MouseMiddle]);

        trackball.update(0.016, &input);
        input.move_to(80.0, 0.0);
        assert!(!trackball.update(0.016, &input));
        assert_eq!(trackball.camera(), before);
    }

    #[test]
    fn degenerate_zoom_keeps_frame() {
        let mut trackball = looking_down_world_up();
        let before = trackball.camera();
        let input = Scripted::holding(&[Button::MouseMiddle, Button::ControlLeft]);

        trackball.update(0.016, &input);
        input.move_to(100.0, 0.0);
        assert!(!trackball.update(0.016, &input));
        assert_eq!(trackball.camera(), before);
    }

    #[test]
    fn pan_still_works_along_world_up() {
        let mut trackball = looking_down_world_up();
        let input = Scripted::holding(&[Button::MouseMiddle, Button::ShiftLeft]);

        trackball.update(0.016, &input);
        input.move_to(0.0, 100.0);
        assert!(trackball.update(0.016, &input));

        let frame = trackball.camera();
        assert!(frame.center().abs_diff_eq(Vec3::Z, 1e-5));
        assert!((frame.up().length() - 1.0).abs() < 1e-5);
        assert!(frame.up().dot(frame.front()).abs() < 1e-5);
    }

    #[test]
    fn speed_never_negative() {
        let mut trackball = TrackballController::new(0.5, Vec3::Y);
        trackball.increase_speed(-2.0);
        assert_eq!(trackball.speed(), 0.0);
        trackball.increase_speed(1.5);
        assert_eq!(trackball.speed(), 1.5);
    }
}
