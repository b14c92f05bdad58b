use log::debug;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::game::{Guess, Hint, MAX_GUESS, MIN_GUESS};

#[cfg(test)]
mod tests;

/// Failure modes for the solver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("hint {hint:?} for guess {guess} contradicts earlier hints")]
    Inconsistent { guess: Guess, hint: Hint },
}

/// Plays the game by keeping track of which targets are still possible.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Smallest target consistent with every hint so far.
    low: Guess,
    /// Largest target consistent with every hint so far.
    high: Guess,
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            low: Guess::clamped(MIN_GUESS.into()),
            high: Guess::clamped(MAX_GUESS.into()),
        }
    }
}

impl Solver {
    /// Targets that are still possible.
    pub fn candidates(&self) -> RangeInclusive<u32> {
        self.low.value()..=self.high.value()
    }

    /// The guess to make next: the middle of the remaining candidates.
    pub fn next_guess(&self) -> Guess {
        self.low.midpoint(self.high)
    }

    /// Narrow the candidates using the hint given for `guess`.
    pub fn observe(&mut self, guess: Guess, hint: Hint) -> Result<(), SolverError> {
        // target = guess - difference
        let differences = hint.difference_range();
        let g = i64::from(guess.value());
        let low = g - i64::from(*differences.end());
        let high = g - i64::from(*differences.start());
        if low > i64::from(self.high.value()) || high < i64::from(self.low.value()) {
            return Err(SolverError::Inconsistent { guess, hint });
        }

        let low = self.low.max(Guess::clamped(low));
        let high = self.high.min(Guess::clamped(high));
        debug!(
            "Hint {:?} for {} narrows {}..={} to {}..={}",
            hint, guess, self.low, self.high, low, high
        );
        self.low = low;
        self.high = high;
        Ok(())
    }
}
