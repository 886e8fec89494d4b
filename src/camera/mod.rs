pub mod controller;
pub mod drag;
pub mod first_person;
pub mod frame;
pub mod projection;
pub mod trackball;

pub use controller::{NavigationMode, Navigator};
pub use first_person::FirstPersonController;
pub use frame::RigidFrame;
pub use projection::Projection;
pub use trackball::TrackballController;
