use bevy::prelude::*;

/// Dash lifecycle notifications. The camera widens its follow lag between
/// `Started` and `Ended`.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum DashEvent {
    Started { entity: Entity, direction: Vec3 },
    Ended { entity: Entity },
}
