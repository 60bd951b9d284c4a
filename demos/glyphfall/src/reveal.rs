//! Staged sequencing: reveal glyphs on a cadence, wait, then spawn brains.

use glyphfall_engine::Timer;

use crate::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Revealing,
    WaitingToSpawn,
    Spawned,
}

/// Drives `Stage::revealed` from elapsed time and reports the single moment
/// the brains are due.
#[derive(Debug, Clone)]
pub struct RevealScheduler {
    phase: RevealPhase,
    cadence: Timer,
    spawn_delay: Timer,
}

impl RevealScheduler {
    pub fn new(interval: f32, delay: f32) -> Self {
        Self {
            phase: RevealPhase::Revealing,
            cadence: Timer::interval(interval),
            spawn_delay: Timer::disarmed_timeout(delay),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Advance by `dt` seconds. Returns true exactly once over the
    /// scheduler's lifetime: on the step the spawn delay runs out.
    pub fn advance(&mut self, dt: f32, stage: &mut Stage) -> bool {
        match self.phase {
            RevealPhase::Revealing => {
                for _ in 0..self.cadence.tick(dt) {
                    if stage.reveal_next() {
                        continue;
                    }
                    // A firing with nothing left to show ends the cadence.
                    self.cadence.cancel();
                    self.spawn_delay.arm();
                    self.phase = RevealPhase::WaitingToSpawn;
                    log::debug!("reveal: {} glyphs shown", stage.revealed());
                    break;
                }
                false
            }
            RevealPhase::WaitingToSpawn => {
                if self.spawn_delay.tick(dt) == 0 {
                    return false;
                }
                self.phase = RevealPhase::Spawned;
                true
            }
            RevealPhase::Spawned => false,
        }
    }
}
