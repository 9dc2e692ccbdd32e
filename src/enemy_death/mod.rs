pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{DeathSequence, LootTable};
pub use plugin::plugin;
pub use systems::{advance_death_sequence_system, begin_death_sequence_system};
