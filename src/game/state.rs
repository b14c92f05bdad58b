use super::Guess;

/// Game state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The number to be guessed.
    pub target: Guess,
    /// Guesses the player may still make.
    pub attempts_left: u32,
    /// Guesses the player has made.
    pub attempts_used: u32,
    /// The first guess of the game, shown on the result screen.
    pub first_guess: Option<Guess>,
    /// The game has been won or lost.
    pub finished: bool,
}

impl GameState {
    pub fn new(target: Guess, max_attempts: u32) -> Self {
        GameState {
            target,
            attempts_left: max_attempts,
            attempts_used: 0,
            first_guess: None,
            finished: false,
        }
    }
}
