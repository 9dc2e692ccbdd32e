/// Countdown that is decremented by elapsed time and is ready once it reaches zero.
///
/// Used for every "may I act again?" gate: dash cooldown, enemy attack cadence,
/// weapon fire rate. Fixed-length phases (flash, grace windows) use Bevy's `Timer`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    /// A cooldown that is ready immediately.
    pub fn ready() -> Self {
        Self { remaining: 0.0 }
    }

    /// A cooldown that becomes ready after `secs`.
    pub fn from_secs(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    /// Decrement by `delta_secs`. Never goes below zero.
    pub fn tick(&mut self, delta_secs: f32) {
        self.remaining = (self.remaining - delta_secs).max(0.0);
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Start counting down from `secs` again.
    pub fn trigger(&mut self, secs: f32) {
        self.remaining = secs.max(0.0);
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_cooldown_is_ready() {
        assert!(Cooldown::ready().is_ready());
        assert!(Cooldown::default().is_ready());
    }

    #[test]
    fn test_cooldown_counts_down_to_ready() {
        let mut cooldown = Cooldown::from_secs(1.0);
        assert!(!cooldown.is_ready());

        cooldown.tick(0.5);
        assert!(!cooldown.is_ready());
        assert_eq!(cooldown.remaining(), 0.5);

        cooldown.tick(0.5);
        assert!(cooldown.is_ready());
    }

    #[test]
    fn test_cooldown_never_goes_negative() {
        let mut cooldown = Cooldown::from_secs(0.2);
        cooldown.tick(5.0);
        assert_eq!(cooldown.remaining(), 0.0);
    }

    #[test]
    fn test_trigger_restarts_countdown() {
        let mut cooldown = Cooldown::ready();
        cooldown.trigger(2.0);
        assert!(!cooldown.is_ready());
        assert_eq!(cooldown.remaining(), 2.0);
    }

    #[test]
    fn test_negative_durations_are_clamped() {
        assert!(Cooldown::from_secs(-1.0).is_ready());
        let mut cooldown = Cooldown::ready();
        cooldown.trigger(-3.0);
        assert!(cooldown.is_ready());
    }
}
