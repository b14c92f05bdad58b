use log::debug;

use super::{guess::Guess, hint::Hint};

/// Attempt counters as they stand after the current guess has been counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempts {
    pub left: u32,
    pub used: u32,
}

/// What happened as a result of a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess was correct.
    Win { attempts_used: u32 },
    /// The guess was wrong, but there are attempts left.
    Continue { hint: Hint, attempts_left: u32 },
    /// The guess was wrong and that was the last attempt.
    Lose { target: Guess },
}

impl GuessResult {
    /// Whether the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuessResult::Continue { .. })
    }

    /// Text to show the player.
    pub fn message(&self) -> String {
        match self {
            GuessResult::Win { attempts_used } => format!(
                "Congratulations! You guessed it right within {} attempts!",
                attempts_used
            ),
            GuessResult::Continue { hint, .. } => hint.to_string(),
            GuessResult::Lose { target } => {
                format!("Game Over! The correct number was: {}", target)
            }
        }
    }

    /// Text for the end-of-game notification. Only terminal results have one.
    pub fn notification(&self) -> Option<String> {
        match self {
            GuessResult::Win { attempts_used } => Some(format!(
                "Congratulations! You won the game in {} attempts!",
                attempts_used
            )),
            GuessResult::Continue { .. } => None,
            GuessResult::Lose { target } => Some(format!(
                "Game Over! The correct number was {}. Please try again.",
                target
            )),
        }
    }
}

/// Judge a single guess. `attempts` must already account for this guess.
pub fn evaluate(guess: Guess, target: Guess, attempts: Attempts) -> GuessResult {
    let Some(hint) = Hint::from_difference(guess.difference(target)) else {
        return GuessResult::Win {
            attempts_used: attempts.used,
        };
    };
    debug!(
        "Guess {} against target {}: {:?}, {} attempts left",
        guess, target, hint, attempts.left
    );
    if attempts.left > 0 {
        GuessResult::Continue {
            hint,
            attempts_left: attempts.left,
        }
    } else {
        GuessResult::Lose { target }
    }
}
