use log::info;

use super::{Driver, DriverError, Outcome};
use crate::{
    game::{Game, GuessResult},
    notify::Notifier,
    solver::Solver,
};

/// A driver which lets a `Solver` play an instance of `Game` directly.
pub struct DirectDriver<N> {
    /// The game itself.
    game: Game,
    /// The solver which will attempt to play the game.
    solver: Solver,
    notifier: N,
}

impl<N: Notifier> DirectDriver<N> {
    pub fn new(game: Game, notifier: N) -> Self {
        DirectDriver {
            game,
            solver: Solver::default(),
            notifier,
        }
    }
}

impl<N: Notifier> Driver for DirectDriver<N> {
    fn play(&mut self) -> Result<Outcome, DriverError> {
        loop {
            let guess = self.solver.next_guess();
            let result = self.game.guess(guess)?;
            info!(
                "Guessed {} from candidates {:?}: {}",
                guess,
                self.solver.candidates(),
                result.message()
            );

            if let GuessResult::Continue { hint, .. } = result {
                self.solver.observe(guess, hint)?;
            } else if let Some(outcome) = Outcome::from_result(&result) {
                if let Some(notification) = result.notification() {
                    self.notifier.notify(&notification);
                }
                return Ok(outcome);
            }
        }
    }
}
