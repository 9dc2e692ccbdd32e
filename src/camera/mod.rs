pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{smooth_damp, CameraRig, Shake};
pub use plugin::plugin;
