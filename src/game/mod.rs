use log::{debug, info};
use rand::Rng;

pub use evaluate::{evaluate, Attempts, GuessResult};
pub use guess::{Guess, GuessError, MAX_GUESS, MIN_GUESS};
pub use hint::Hint;
pub use state::GameState;

mod evaluate;
mod guess;
mod hint;
mod state;

/// Default number of guesses a player gets.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Shown when the player asks for help.
pub const HINTS: &str = "Hints for Guessing:
1. The number is between 1 and 100.
2. If your guess is too high, try a much lower number.
3. If your guess is too low, try a much higher number.
4. Pay attention to the hints provided after each guess.
5. You have a limited number of attempts, so use them wisely!";

/// A single game of guess the number.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game state.
    pub state: GameState,
}

impl Game {
    /// Start a new game with a target drawn uniformly from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(max_attempts: u32, rng: &mut R) -> Self {
        Game::with_target(Guess::random(rng), max_attempts)
    }

    /// Start a new game with a known target.
    pub fn with_target(target: Guess, max_attempts: u32) -> Self {
        info!("New game with {} attempts", max_attempts);
        debug!("Target is {}", target);
        Game {
            state: GameState::new(target, max_attempts),
        }
    }

    /// Make a guess, using up an attempt.
    pub fn guess(&mut self, guess: Guess) -> Result<GuessResult, GuessError> {
        if self.state.finished {
            return Err(GuessError::Finished);
        }

        self.state.first_guess.get_or_insert(guess);
        self.state.attempts_left = self.state.attempts_left.saturating_sub(1);
        self.state.attempts_used += 1;

        let result = evaluate(
            guess,
            self.state.target,
            Attempts {
                left: self.state.attempts_left,
                used: self.state.attempts_used,
            },
        );
        if result.is_terminal() {
            self.state.finished = true;
            info!("Game finished: {:?}", result);
        }
        Ok(result)
    }

    /// Parse and make a guess. Input that isn't a valid guess leaves the game untouched.
    pub fn submit(&mut self, input: &str) -> Result<GuessResult, GuessError> {
        let guess = input.parse::<Guess>()?;
        self.guess(guess)
    }
}
