pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{ExperienceGem, LevelProgress};
pub use events::{ExperienceCollected, PlayerLevelUpEvent};
pub use plugin::plugin;
pub use resources::GemSettings;
