//! Game driver - schedules the session clock and the deferred pair clear
//!
//! The session itself has no notion of time. `Game` accumulates elapsed
//! milliseconds from the front-end loop and turns them into:
//!
//! - one [`SessionState::tick`] per 1000ms while the session is running
//! - one [`SessionState::resolve_selection`] `resolve_delay_ms` after a pair is revealed
//!
//! Both timers are cancelled when a new session starts. The clock timer also
//! stops as soon as the session completes.

use log::{debug, info};

use crate::config::GameConfig;
use crate::core::{Activation, Alphabet, ClearToken, SessionSnapshot, SessionState};
use crate::types::{GameAction, SECOND_MS};

/// A deferred clear waiting to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub token: ClearToken,
    pub remaining_ms: u32,
}

/// What happened during one [`Game::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Advance {
    /// Seconds added to the session clock.
    pub ticks: u32,
    /// The revealed pair was hidden again.
    pub cleared: bool,
}

impl Advance {
    pub fn changed(&self) -> bool {
        self.ticks > 0 || self.cleared
    }
}

#[derive(Debug, Clone)]
enum SeedSource {
    Sequence(u64),
    Entropy,
}

impl SeedSource {
    fn next(&mut self) -> u64 {
        match self {
            SeedSource::Sequence(next) => {
                let seed = *next;
                *next = next.wrapping_add(1);
                seed
            }
            SeedSource::Entropy => rand::random(),
        }
    }
}

/// Session plus its timers
#[derive(Debug, Clone)]
pub struct Game {
    session: SessionState,
    seeds: SeedSource,
    resolve_delay_ms: u32,
    /// Milliseconds accumulated toward the next clock tick.
    clock_ms: u32,
    pending_clear: Option<PendingClear>,
}

impl Game {
    /// Start the first session over the full fruit alphabet.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_alphabet(config, Alphabet::fruits())
    }

    pub fn with_alphabet(config: &GameConfig, alphabet: Alphabet) -> Self {
        let mut seeds = match config.seed {
            Some(seed) => SeedSource::Sequence(seed),
            None => SeedSource::Entropy,
        };
        let session = SessionState::new(alphabet, seeds.next());
        Self::from_session(session, seeds, config.resolve_delay_ms)
    }

    /// Drive an already-built session (fixed deck layouts in tests and tools).
    pub fn with_session(config: &GameConfig, session: SessionState) -> Self {
        let seeds = match config.seed {
            Some(seed) => SeedSource::Sequence(seed),
            None => SeedSource::Entropy,
        };
        Self::from_session(session, seeds, config.resolve_delay_ms)
    }

    fn from_session(session: SessionState, seeds: SeedSource, resolve_delay_ms: u32) -> Self {
        Self {
            session,
            seeds,
            resolve_delay_ms,
            clock_ms: 0,
            pending_clear: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn pending_clear(&self) -> Option<PendingClear> {
        self.pending_clear
    }

    pub fn resolve_delay_ms(&self) -> u32 {
        self.resolve_delay_ms
    }

    /// Milliseconds until the next clock tick, or `None` while stopped.
    pub fn next_tick_in_ms(&self) -> Option<u32> {
        self.session
            .running()
            .then(|| SECOND_MS.saturating_sub(self.clock_ms))
    }

    /// Dispatch an action from the front-end.
    pub fn apply_action(&mut self, action: GameAction) -> Option<Activation> {
        match action {
            GameAction::Activate(index) => Some(self.activate(index)),
            GameAction::Restart => {
                self.restart();
                None
            }
        }
    }

    /// Reveal a tile, arming the deferred clear when a pair completes.
    pub fn activate(&mut self, index: usize) -> Activation {
        let outcome = self.session.activate(index);
        if let Activation::PairRevealed {
            token, complete, ..
        } = outcome
        {
            self.pending_clear = Some(PendingClear {
                token,
                remaining_ms: self.resolve_delay_ms,
            });
            if complete {
                // Clock stops with the session.
                self.clock_ms = 0;
            }
        }
        outcome
    }

    /// Start a new session, cancelling both timers.
    pub fn restart(&mut self) {
        if let Some(pending) = self.pending_clear.take() {
            debug!(
                "cancelled pending clear for session {}",
                pending.token.session_id()
            );
        }
        self.clock_ms = 0;
        let seed = self.seeds.next();
        self.session.restart(seed);
        info!("restarted as session {}", self.session.session_id());
    }

    /// Advance both timers by `elapsed_ms`, firing every event that falls due.
    ///
    /// Events fire in time order, so a large step behaves like many small ones.
    pub fn advance(&mut self, elapsed_ms: u32) -> Advance {
        let mut report = Advance::default();
        let mut remaining = elapsed_ms;

        loop {
            let running = self.session.running();
            let to_tick = if running {
                SECOND_MS.saturating_sub(self.clock_ms)
            } else {
                u32::MAX
            };
            let to_clear = self.pending_clear.map_or(u32::MAX, |p| p.remaining_ms);
            let step = to_tick.min(to_clear);

            if step > remaining {
                if running {
                    self.clock_ms += remaining;
                }
                if let Some(pending) = self.pending_clear.as_mut() {
                    pending.remaining_ms -= remaining;
                }
                break;
            }

            remaining -= step;
            if running {
                self.clock_ms += step;
            }

            if let Some(mut pending) = self.pending_clear.take() {
                pending.remaining_ms -= step;
                if pending.remaining_ms == 0 {
                    report.cleared |= self.session.resolve_selection(pending.token);
                } else {
                    self.pending_clear = Some(pending);
                }
            }

            if running && self.clock_ms >= SECOND_MS {
                self.clock_ms = 0;
                if self.session.tick() {
                    report.ticks += 1;
                }
            }
        }

        report
    }
}
