use std::fmt;
use thiserror::Error;

use crate::{
    game::{Guess, GuessError, GuessResult},
    solver::SolverError,
};

pub mod direct;
pub mod terminal;

/// Defines a way of playing the game through to the end.
pub trait Driver {
    /// Play the game.
    fn play(&mut self) -> Result<Outcome, DriverError>;
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts_used: u32 },
    Lost { target: Guess },
}

impl Outcome {
    /// The outcome of a game that ended with `result`, if it did end.
    pub fn from_result(result: &GuessResult) -> Option<Self> {
        match result {
            GuessResult::Win { attempts_used } => Some(Outcome::Won {
                attempts_used: *attempts_used,
            }),
            GuessResult::Continue { .. } => None,
            GuessResult::Lose { target } => Some(Outcome::Lost { target: *target }),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won { attempts_used } => write!(f, "won in {} attempts", attempts_used),
            Outcome::Lost { target } => write!(f, "lost, the number was {}", target),
        }
    }
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("guess rejected")]
    Guess(#[from] GuessError),
    #[error("solver failed")]
    Solver(#[from] SolverError),
}
