pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{
    Arsenal, AxeSettings, BeamSettings, DamageBeam, SlashAttack, SlashSettings, ThrownAxe,
    WeaponKind, WeaponSlot,
};
pub use plugin::plugin;
