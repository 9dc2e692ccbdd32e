pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use components::*;
pub use events::DashEvent;
pub use plugin::plugin;
pub use systems::*;
