//! Decorative team draw shown on the selection screen.
//!
//! A spin resolves exactly once: the first [`Roulette::poll`] at or after the
//! deadline reveals the picked team and later polls return nothing. There is
//! no retry and no re-spin until [`Roulette::reset`].

use std::time::{Duration, Instant};

use rand::Rng;

use crate::session::TEAM_COUNT;

/// How long the wheel spins before revealing a team.
pub const SPIN_DURATION: Duration = Duration::from_millis(1500);
/// How often the highlight moves while spinning.
pub const SPIN_STEP: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Roulette {
    #[default]
    Idle,
    Spinning {
        started: Instant,
        pick: usize,
    },
    Revealed(usize),
}

impl Roulette {
    /// Starts a spin. Only an idle roulette can be spun.
    pub fn spin<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        if !matches!(self, Roulette::Idle) {
            return false;
        }
        *self = Roulette::Spinning {
            started: now,
            pick: rng.gen_range(0..TEAM_COUNT),
        };
        true
    }

    /// Returns the picked team the first time the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        match *self {
            Roulette::Spinning { started, pick }
                if now.saturating_duration_since(started) >= SPIN_DURATION =>
            {
                *self = Roulette::Revealed(pick);
                Some(pick)
            }
            _ => None,
        }
    }

    /// Team to highlight: cycling while spinning, fixed once revealed.
    pub fn highlighted(&self, now: Instant) -> Option<usize> {
        match *self {
            Roulette::Idle => None,
            Roulette::Spinning { started, .. } => {
                let elapsed = now.saturating_duration_since(started);
                let steps = elapsed.as_millis() / SPIN_STEP.as_millis();
                Some((steps % TEAM_COUNT as u128) as usize)
            }
            Roulette::Revealed(team) => Some(team),
        }
    }

    pub fn revealed(&self) -> Option<usize> {
        match *self {
            Roulette::Revealed(team) => Some(team),
            _ => None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self, Roulette::Spinning { .. })
    }

    pub fn reset(&mut self) {
        *self = Roulette::Idle;
    }
}
