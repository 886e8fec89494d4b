use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use super::first_person::FirstPersonController;
use super::frame::RigidFrame;
use super::trackball::TrackballController;
use crate::traits::{CameraController, InputSource};

/// Selectable navigation behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    #[default]
    Trackball,
    FirstPerson,
}

impl NavigationMode {
    pub const ALL: [NavigationMode; 2] = [NavigationMode::Trackball, NavigationMode::FirstPerson];

    pub fn label(self) -> &'static str {
        match self {
            NavigationMode::Trackball => "Trackball",
            NavigationMode::FirstPerson => "First person",
        }
    }
}

/// The active camera controller
///
/// Switching modes copies the outgoing frame into the incoming controller,
/// so the view does not jump. Speed and world up carry over as well.
#[derive(Debug, Clone)]
pub enum Navigator {
    Trackball(TrackballController),
    FirstPerson(FirstPersonController),
}

impl Navigator {
    pub fn new(mode: NavigationMode, speed: f32, world_up: Vec3) -> Self {
        match mode {
            NavigationMode::Trackball => Navigator::Trackball(TrackballController::new(speed, world_up)),
            NavigationMode::FirstPerson => {
                Navigator::FirstPerson(FirstPersonController::new(speed, world_up))
            }
        }
    }

    pub fn mode(&self) -> NavigationMode {
        match self {
            Navigator::Trackball(_) => NavigationMode::Trackball,
            Navigator::FirstPerson(_) => NavigationMode::FirstPerson,
        }
    }

    /// Replace the active controller, keeping frame, speed and world up
    pub fn switch_to(&mut self, mode: NavigationMode) {
        if mode == self.mode() {
            return;
        }

        let frame = self.camera();
        let mut next = Navigator::new(mode, self.speed(), self.world_up_axis());
        next.set_camera(frame);
        *self = next;

        info!("Navigation mode: {}", mode.label());
    }

    pub fn speed(&self) -> f32 {
        match self {
            Navigator::Trackball(c) => c.speed(),
            Navigator::FirstPerson(c) => c.speed(),
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        match self {
            Navigator::Trackball(c) => c.set_speed(speed),
            Navigator::FirstPerson(c) => c.set_speed(speed),
        }
    }

    pub fn increase_speed(&mut self, delta: f32) {
        match self {
            Navigator::Trackball(c) => c.increase_speed(delta),
            Navigator::FirstPerson(c) => c.increase_speed(delta),
        }
    }

    pub fn world_up_axis(&self) -> Vec3 {
        match self {
            Navigator::Trackball(c) => c.world_up_axis(),
            Navigator::FirstPerson(c) => c.world_up_axis(),
        }
    }

    pub fn set_world_up_axis(&mut self, axis: Vec3) {
        match self {
            Navigator::Trackball(c) => c.set_world_up_axis(axis),
            Navigator::FirstPerson(c) => c.set_world_up_axis(axis),
        }
    }

    pub fn is_dragging(&self) -> bool {
        match self {
            Navigator::Trackball(c) => c.is_dragging(),
            Navigator::FirstPerson(c) => c.is_dragging(),
        }
    }
}

impl CameraController for Navigator {
    fn update(&mut self, elapsed: f32, input: &dyn InputSource) -> bool {
        match self {
            Navigator::Trackball(c) => c.update(elapsed, input),
            Navigator::FirstPerson(c) => c.update(elapsed, input),
        }
    }

    fn camera(&self) -> RigidFrame {
        match self {
            Navigator::Trackball(c) => c.camera(),
            Navigator::FirstPerson(c) => c.camera(),
        }
    }

    fn set_camera(&mut self, frame: RigidFrame) {
        match self {
            Navigator::Trackball(c) => c.set_camera(frame),
            Navigator::FirstPerson(c) => c.set_camera(frame),
        }
    }
}
