use bevy::prelude::*;

use crate::enemies::components::EnemyArchetype;
use crate::game::config::{non_negative, ConfigError, Result};

/// One batch of enemies: `enemy_count` spawns of `archetype`, one every
/// `spawn_interval` seconds, then an optional quiet period.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    pub archetype: EnemyArchetype,
    pub spawn_interval: f32,
    pub enemy_count: u32,
    pub post_wave_duration: f32,
}

impl Wave {
    pub fn new(archetype: EnemyArchetype, enemy_count: u32, spawn_interval: f32) -> Self {
        Self {
            archetype,
            spawn_interval,
            enemy_count,
            post_wave_duration: 0.0,
        }
    }

    pub fn with_post_wave_duration(mut self, secs: f32) -> Self {
        self.post_wave_duration = secs;
        self
    }

    fn validate(&self, wave: usize) -> Result<()> {
        if self.spawn_interval <= 0.0 || self.spawn_interval.is_nan() {
            return Err(ConfigError::WaveInterval {
                wave,
                value: self.spawn_interval,
            });
        }
        if self.post_wave_duration < 0.0 || self.post_wave_duration.is_nan() {
            return Err(ConfigError::WaveDuration {
                wave,
                value: self.post_wave_duration,
            });
        }
        self.archetype.validate()
    }
}

/// Wave list used when nothing else is configured.
pub fn default_waves() -> Vec<Wave> {
    vec![
        Wave::new(EnemyArchetype::grunt(), 5, 1.0).with_post_wave_duration(3.0),
        Wave::new(EnemyArchetype::grunt(), 10, 0.6).with_post_wave_duration(3.0),
        Wave::new(EnemyArchetype::brute(), 3, 2.0).with_post_wave_duration(4.0),
        Wave::new(EnemyArchetype::grunt(), 20, 0.3),
    ]
}

/// Where the sequencer is inside the wave list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WavePhase {
    /// Not advanced yet
    Pending,
    /// Spawning wave `wave`; `wait` is the time left before the next step
    Spawning { wave: usize, spawned: u32, wait: f32 },
    /// Quiet period after wave `wave`
    Waiting { wave: usize, remaining: f32 },
    Finished,
}

/// Something that happened during one `advance` call, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveStep {
    Started(usize),
    Spawn(usize),
    Cleared(usize),
    AllFinished,
}

/// Runs the wave list in strict order.
///
/// Each spawn is followed by a full `spawn_interval` wait (including the last
/// one in a wave), then the wave's `post_wave_duration`. Time left over after
/// a step carries into the next one, so the cadence does not depend on the
/// frame rate.
#[derive(Resource, Debug, Clone)]
pub struct WaveSequencer {
    waves: Vec<Wave>,
    spawn_radius: f32,
    phase: WavePhase,
}

impl WaveSequencer {
    pub fn new(waves: Vec<Wave>, spawn_radius: f32) -> Result<Self> {
        for (index, wave) in waves.iter().enumerate() {
            wave.validate(index)?;
        }
        non_negative("spawn radius", spawn_radius)?;
        Ok(Self {
            waves,
            spawn_radius,
            phase: WavePhase::Pending,
        })
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn spawn_radius(&self) -> f32 {
        self.spawn_radius
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// Index of the wave in progress (equals the wave count once finished).
    pub fn wave_index(&self) -> usize {
        match self.phase {
            WavePhase::Pending => 0,
            WavePhase::Spawning { wave, .. } | WavePhase::Waiting { wave, .. } => wave,
            WavePhase::Finished => self.waves.len(),
        }
    }

    pub fn spawned_in_wave(&self) -> u32 {
        match self.phase {
            WavePhase::Spawning { spawned, .. } => spawned,
            WavePhase::Waiting { wave, .. } => self.waves[wave].enemy_count,
            WavePhase::Pending | WavePhase::Finished => 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == WavePhase::Finished
    }

    /// Rewind to before the first wave, keeping the wave list and radius.
    pub fn restart(&mut self) {
        self.phase = WavePhase::Pending;
    }

    /// Run the sequencer forward by `delta_secs` and report every step taken.
    pub fn advance(&mut self, delta_secs: f32) -> Vec<WaveStep> {
        let mut steps = Vec::new();
        let mut budget = delta_secs.max(0.0);

        loop {
            match self.phase {
                WavePhase::Finished => break,
                WavePhase::Pending => self.start_wave(0, &mut steps),
                WavePhase::Spawning {
                    wave,
                    spawned,
                    wait,
                } => {
                    if wait > budget {
                        self.phase = WavePhase::Spawning {
                            wave,
                            spawned,
                            wait: wait - budget,
                        };
                        break;
                    }
                    budget -= wait;

                    let current = &self.waves[wave];
                    if spawned < current.enemy_count {
                        steps.push(WaveStep::Spawn(wave));
                        self.phase = WavePhase::Spawning {
                            wave,
                            spawned: spawned + 1,
                            wait: current.spawn_interval,
                        };
                    } else {
                        steps.push(WaveStep::Cleared(wave));
                        if current.post_wave_duration > 0.0 {
                            self.phase = WavePhase::Waiting {
                                wave,
                                remaining: current.post_wave_duration,
                            };
                        } else {
                            self.start_wave(wave + 1, &mut steps);
                        }
                    }
                }
                WavePhase::Waiting { wave, remaining } => {
                    if remaining > budget {
                        self.phase = WavePhase::Waiting {
                            wave,
                            remaining: remaining - budget,
                        };
                        break;
                    }
                    budget -= remaining;
                    self.start_wave(wave + 1, &mut steps);
                }
            }
        }

        steps
    }

    fn start_wave(&mut self, wave: usize, steps: &mut Vec<WaveStep>) {
        if wave >= self.waves.len() {
            self.phase = WavePhase::Finished;
            steps.push(WaveStep::AllFinished);
        } else {
            self.phase = WavePhase::Spawning {
                wave,
                spawned: 0,
                wait: 0.0,
            };
            steps.push(WaveStep::Started(wave));
        }
    }
}

impl Default for WaveSequencer {
    fn default() -> Self {
        Self {
            waves: default_waves(),
            spawn_radius: 10.0,
            phase: WavePhase::Pending,
        }
    }
}
