pub mod area;
pub mod components;
pub mod events;
pub mod hit;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{ActorKind, DamageFlash, HitReaction, HitSet, HitTilt, Hitbox, Invincibility, Stats};
pub use events::{CameraShakeEvent, DamageEvent, DeathEvent, HitEvent};
pub use hit::{resolve_hit, DamageResult, HitOutcome};
pub use plugin::plugin;
pub use resources::DamageFloors;
pub use systems::{apply_damage_system, update_damage_flash_system, update_hit_tilt_system};
