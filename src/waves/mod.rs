pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use events::WaveEvent;
pub use plugin::plugin;
pub use resources::{default_waves, Wave, WavePhase, WaveSequencer, WaveStep};
