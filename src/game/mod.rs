pub mod config;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod sets;
pub mod systems;

pub use config::ConfigError;
pub use events::*;
pub use plugin::plugin;
pub use resources::*;
pub use sets::GameSet;
pub use systems::*;
