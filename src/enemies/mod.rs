pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Enemy, EnemyArchetype};
pub use plugin::plugin;
pub use systems::{enemy_attack_system, enemy_chase_system};
