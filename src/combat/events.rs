use bevy::prelude::*;

use super::components::ActorKind;

/// Request to damage an actor. Resolved by `apply_damage_system`.
#[derive(Message, Debug, Clone)]
pub struct DamageEvent {
    /// The entity that should take damage
    pub target: Entity,
    /// Raw damage before defense
    pub amount: f32,
    /// Entity that dealt the damage (if any)
    pub source: Option<Entity>,
    /// Where the blow came from; knockback pushes away from this point
    pub source_position: Vec3,
}

impl DamageEvent {
    pub fn new(target: Entity, amount: f32, source_position: Vec3) -> Self {
        Self {
            target,
            amount,
            source: None,
            source_position,
        }
    }

    pub fn with_source(target: Entity, amount: f32, source: Entity, source_position: Vec3) -> Self {
        Self {
            target,
            amount,
            source: Some(source),
            source_position,
        }
    }
}

/// Fired for every damage request that actually landed.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct HitEvent {
    pub target: Entity,
    /// Damage after defense and floor
    pub amount: f32,
    pub died: bool,
}

/// Fired exactly once when an actor's health reaches zero.
#[derive(Message, Debug, Clone)]
pub struct DeathEvent {
    /// The entity that died
    pub entity: Entity,
    /// Position where the entity died
    pub position: Vec3,
    pub kind: ActorKind,
}

impl DeathEvent {
    pub fn new(entity: Entity, position: Vec3, kind: ActorKind) -> Self {
        Self {
            entity,
            position,
            kind,
        }
    }
}

/// Camera shake request. Fire-and-forget; whoever owns the camera listens.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CameraShakeEvent {
    pub duration: f32,
    pub magnitude: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_event_new() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let event = DamageEvent::new(target, 25.0, Vec3::X);

        assert_eq!(event.target, target);
        assert_eq!(event.amount, 25.0);
        assert!(event.source.is_none());
        assert_eq!(event.source_position, Vec3::X);
    }

    #[test]
    fn test_damage_event_with_source() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let source = world.spawn_empty().id();
        let event = DamageEvent::with_source(target, 50.0, source, Vec3::Z);

        assert_eq!(event.source, Some(source));
        assert_eq!(event.source_position, Vec3::Z);
    }

    #[test]
    fn test_death_event_new() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let event = DeathEvent::new(entity, Vec3::new(1.0, 0.0, 2.0), ActorKind::Enemy);

        assert_eq!(event.entity, entity);
        assert_eq!(event.position, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(event.kind, ActorKind::Enemy);
    }
}
