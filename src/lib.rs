pub mod camera;
pub mod combat;
pub mod enemies;
pub mod enemy_death;
pub mod experience;
pub mod game;
pub mod movement;
pub mod player;
pub mod prelude;
pub mod rng;
pub mod states;
pub mod timing;
pub mod waves;
pub mod weapons;

pub use game::plugin as game_plugin;
