use bevy::prelude::*;

use super::components::ActorKind;

/// Minimum damage a landed hit deals, per actor kind.
///
/// The player always takes at least chip damage while enemies can be fully
/// armored. The two values are kept separate pending a game-design call on
/// whether they should match.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DamageFloors {
    pub player: f32,
    pub enemy: f32,
}

impl DamageFloors {
    pub fn for_kind(&self, kind: ActorKind) -> f32 {
        match kind {
            ActorKind::Player => self.player,
            ActorKind::Enemy => self.enemy,
        }
    }
}

impl Default for DamageFloors {
    fn default() -> Self {
        Self {
            player: 1.0,
            enemy: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_floors_are_asymmetric() {
        let floors = DamageFloors::default();
        assert_eq!(floors.for_kind(ActorKind::Player), 1.0);
        assert_eq!(floors.for_kind(ActorKind::Enemy), 0.0);
    }

    #[test]
    fn test_floors_are_configurable() {
        let floors = DamageFloors {
            player: 0.0,
            enemy: 2.0,
        };
        assert_eq!(floors.for_kind(ActorKind::Player), 0.0);
        assert_eq!(floors.for_kind(ActorKind::Enemy), 2.0);
    }
}
