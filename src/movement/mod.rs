pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use components::{from_xz, to_xz, Facing, Knockback, KnockbackSettings, Locomotion, MotionState};
pub use events::KnockbackEvent;
pub use plugin::plugin;
