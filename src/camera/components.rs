use bevy::prelude::*;

/// Active screen shake: random offset of up to `magnitude` while time remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shake {
    pub remaining: f32,
    pub magnitude: f32,
}

/// Third-person follow camera state.
///
/// The camera sits `zoom` units from the player along `offset`, eased toward
/// that point with a critically damped spring. Dashing lengthens the spring's
/// smoothing time so the player briefly pulls ahead of the view.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Direction from the player to the camera (normalized on use)
    pub offset: Vec3,
    pub zoom: f32,
    pub target_zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_speed: f32,
    pub normal_smooth_time: f32,
    pub dash_smooth_time: f32,
    pub smooth_time: f32,
    pub velocity: Vec3,
    pub shake: Option<Shake>,
}

impl CameraRig {
    /// Nudge the zoom target; it stays within `min_zoom..=max_zoom`.
    pub fn zoom_by(&mut self, delta: f32) {
        self.target_zoom = (self.target_zoom + delta).clamp(self.min_zoom, self.max_zoom);
    }

    pub fn set_dash_lag(&mut self, dashing: bool) {
        self.smooth_time = if dashing {
            self.dash_smooth_time
        } else {
            self.normal_smooth_time
        };
    }

    /// Start a shake, replacing any shake in progress.
    pub fn shake(&mut self, duration: f32, magnitude: f32) {
        self.shake = Some(Shake {
            remaining: duration,
            magnitude,
        });
    }

    /// Move `zoom` a `zoom_speed * dt` fraction of the way to `target_zoom`.
    pub fn ease_zoom(&mut self, delta_secs: f32) {
        let t = (self.zoom_speed * delta_secs).min(1.0);
        self.zoom += (self.target_zoom - self.zoom) * t;
    }

    /// Resting camera position for a player at `player_position`.
    pub fn follow_point(&self, player_position: Vec3) -> Vec3 {
        player_position + self.offset.normalize_or_zero() * self.zoom
    }

    /// Rotation that looks back along `offset` at the player.
    pub fn view_rotation(&self) -> Quat {
        Transform::IDENTITY.looking_to(-self.offset, Vec3::Y).rotation
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        let min_zoom = 5.0;
        let max_zoom = 15.0;
        let zoom = (min_zoom + max_zoom) / 2.0;
        Self {
            offset: Vec3::new(0.0, 10.0, -10.0),
            zoom,
            target_zoom: zoom,
            min_zoom,
            max_zoom,
            zoom_speed: 5.0,
            normal_smooth_time: 0.1,
            dash_smooth_time: 0.4,
            smooth_time: 0.1,
            velocity: Vec3::ZERO,
            shake: None,
        }
    }
}

/// Critically damped spring toward `target`, in the style of Unity's `SmoothDamp`.
///
/// `velocity` carries between calls. The result never overshoots `target`.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    delta_secs: f32,
) -> Vec3 {
    if delta_secs <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_secs;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * delta_secs;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Overshoot
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }
    output
}
