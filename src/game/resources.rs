use bevy::prelude::*;

use crate::game::config::Result;
use crate::player::components::DashSettings;
use crate::weapons::components::Arsenal;

/// The player's ground-plane position, mirrored every frame for spawners.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerPosition(pub Vec2);

/// Running tally for the current game.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct RunStats {
    pub kills: u32,
    pub waves_cleared: u32,
    pub all_waves_finished: bool,
    /// Seconds spent in `InGame`
    pub elapsed: f32,
}

/// Tuning the player spawns with at the start of each game.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct PlayerLoadout {
    pub dash: DashSettings,
    pub arsenal: Arsenal,
}

impl PlayerLoadout {
    pub fn validate(&self) -> Result<()> {
        self.dash.validate()?;
        self.arsenal.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::ConfigError;

    #[test]
    fn test_default_loadout_is_valid() {
        assert!(PlayerLoadout::default().validate().is_ok());
    }

    #[test]
    fn test_loadout_rejects_bad_dash() {
        let mut loadout = PlayerLoadout::default();
        loadout.dash.duration = 0.0;
        assert!(matches!(
            loadout.validate(),
            Err(ConfigError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_loadout_rejects_bad_weapon() {
        let mut loadout = PlayerLoadout::default();
        loadout.arsenal.0[0].interval = -1.0;
        assert!(loadout.validate().is_err());
    }
}
