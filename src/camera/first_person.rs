use glam::Vec3;

use super::drag::DragTracker;
use super::frame::RigidFrame;
use crate::traits::{Button, CameraController, InputSource};

/// Radians per cursor pixel for pan and tilt
pub const LOOK_SENSITIVITY: f32 = 0.001;

/// Radians of roll per update while Q or E is held
pub const ROLL_STEP: f32 = 0.001;

/// Fly-through navigation: WASD to move, arrows for height, Q/E to roll, drag to look
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    speed: f32,
    world_up: Vec3,
    frame: RigidFrame,
    drag: DragTracker,
}

impl FirstPersonController {
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
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self::new(1.0, Vec3::Y)
    }
}

impl CameraController for FirstPersonController {
    fn update(&mut self, elapsed: f32, input: &dyn InputSource) -> bool {
        let delta = self.drag.sample(input);
        let step = self.speed * elapsed;
        let axis = |positive: Button, negative: Button| -> f32 {
            let mut value = 0.0;
            if input.is_down(positive) {
                value += 1.0;
            }
            if input.is_down(negative) {
                value -= 1.0;
            }
            value
        };

        let dolly_in = axis(Button::KeyW, Button::KeyS) * step;
        let truck_left = axis(Button::KeyA, Button::KeyD) * step;
        let pedestal_up = axis(Button::ArrowUp, Button::ArrowDown) * step;
        // Fixed step per update, independent of elapsed time.
        let roll_right = axis(Button::KeyE, Button::KeyQ) * ROLL_STEP;

        let pan_left = -LOOK_SENSITIVITY * delta.x;
        let tilt_down = LOOK_SENSITIVITY * delta.y;

        let moved = [truck_left, pedestal_up, dolly_in, roll_right, tilt_down, pan_left]
            .iter()
            .any(|&v| v != 0.0);
        if !moved {
            return false;
        }

        self.frame.move_local(truck_left, pedestal_up, dolly_in);
        self.frame.rotate_local(roll_right, tilt_down, 0.0);
        self.frame.rotate_world(pan_left, self.world_up);
        true
    }

    fn camera(&self) -> RigidFrame {
        self.frame
    }

    fn set_camera(&mut self, frame: RigidFrame) {
        self.frame = frame;
    }
}
