pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod traits;
pub mod types;

pub use camera::{FirstPersonController, NavigationMode, Navigator, Projection, RigidFrame, TrackballController};
pub use error::CameraError;
pub use traits::{Button, CameraController, InputSource};
