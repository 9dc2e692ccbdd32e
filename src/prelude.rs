pub use bevy::prelude::*;
pub use crate::states::*;

// Re-export components
pub use crate::camera::components::*;
pub use crate::combat::components::*;
pub use crate::enemies::components::*;
pub use crate::enemy_death::components::*;
pub use crate::experience::components::*;
pub use crate::movement::components::*;
pub use crate::player::components::*;
pub use crate::weapons::components::*;

// Re-export messages and resources
pub use crate::combat::events::*;
pub use crate::experience::events::*;
pub use crate::experience::resources::*;
pub use crate::game::events::*;
pub use crate::game::resources::*;
pub use crate::movement::events::*;
pub use crate::player::events::*;
pub use crate::waves::events::*;
pub use crate::waves::resources::*;

pub use crate::game::config::ConfigError;
pub use crate::game::sets::GameSet;
pub use crate::rng::GameRng;
pub use crate::timing::Cooldown;
