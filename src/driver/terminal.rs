use log::{info, warn};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

use super::{Driver, DriverError, Outcome};
use crate::{
    config::Config,
    game::{Game, Guess, GuessError, HINTS, MAX_GUESS, MIN_GUESS},
    notify::Notifier,
};

/// Inputs which show the hints sheet instead of counting as a guess.
const HELP_COMMANDS: [&str; 2] = ["?", "hints"];
/// Abandons the current game and starts a new one, from the result screen.
const RESTART_COMMAND: &str = "restart";

#[derive(Debug, Clone, Copy)]
enum Screen {
    /// Takes the first guess.
    Start,
    /// Shows the outcome of each guess and takes the rest.
    Result,
}

/// A driver for a person playing at a terminal. The game runs over two screens: a start
/// screen which takes the first guess, and a result screen which gives hints and takes the
/// rest.
pub struct TerminalDriver<R, W, N> {
    input: R,
    output: W,
    notifier: N,
    /// Used to pick each new game's target.
    rng: StdRng,
    max_attempts: u32,
}

impl<R, W, N> TerminalDriver<R, W, N>
where
    R: BufRead,
    W: Write,
    N: Notifier,
{
    pub fn new(input: R, output: W, notifier: N, config: &Config) -> Self {
        TerminalDriver {
            input,
            output,
            notifier,
            rng: config.rng(),
            max_attempts: config.max_attempts,
        }
    }

    /// Read one line, without its line ending. Bytes that aren't UTF-8 are replaced rather
    /// than treated as an error, so they get rejected like any other bad guess.
    fn read_line(&mut self) -> Result<String, DriverError> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(DriverError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_owned())
    }

    /// Read a line that isn't a request for hints, showing the hints sheet for any that are.
    fn read_input(&mut self) -> Result<String, DriverError> {
        loop {
            let line = self.read_line()?;
            if HELP_COMMANDS.contains(&line.to_lowercase().as_str()) {
                writeln!(self.output, "{}", HINTS)?;
            } else {
                return Ok(line);
            }
        }
    }

    fn reject(
        &mut self,
        line: &str,
        error: GuessError,
        screen: Screen,
    ) -> Result<(), DriverError> {
        warn!("Rejected input {:?} on {:?} screen: {:?}", line, screen, error);
        match (screen, &error) {
            (Screen::Result, GuessError::NotANumber(_) | GuessError::OutOfRange(_)) => writeln!(
                self.output,
                "Please enter a valid number between {} and {}",
                MIN_GUESS, MAX_GUESS
            )?,
            _ => writeln!(self.output, "{}", error)?,
        }
        Ok(())
    }

    /// Start screen. Waits for a valid first guess.
    fn first_guess(&mut self) -> Result<Guess, DriverError> {
        writeln!(self.output, "Let's Play! Guess the number")?;
        writeln!(self.output, "(enter ? for hints)")?;
        loop {
            let line = self.read_input()?;
            match line.parse::<Guess>() {
                Ok(guess) => return Ok(guess),
                Err(e) => self.reject(&line, e, Screen::Start)?,
            }
        }
    }

    /// Result screen. Takes guesses until the game is over, or returns `None` if the player
    /// restarts before then.
    fn play_round(&mut self, game: &mut Game) -> Result<Option<Outcome>, DriverError> {
        let first_guess = self.first_guess()?;
        let mut result = game.guess(first_guess)?;
        loop {
            if let Some(first_guess) = game.state.first_guess {
                writeln!(self.output, "Your first guess was: {}", first_guess)?;
            }
            writeln!(self.output, "{}", result.message())?;
            writeln!(self.output, "Attempts left: {}", game.state.attempts_left)?;
            if let Some(outcome) = Outcome::from_result(&result) {
                if let Some(notification) = result.notification() {
                    self.notifier.notify(&notification);
                }
                return Ok(Some(outcome));
            }

            result = loop {
                let line = self.read_input()?;
                if is_restart(&line) {
                    info!("Restarting with {} attempts left", game.state.attempts_left);
                    return Ok(None);
                }
                match game.submit(&line) {
                    Ok(result) => break result,
                    Err(GuessError::Finished) => return Err(GuessError::Finished.into()),
                    Err(e) => self.reject(&line, e, Screen::Result)?,
                }
            };
        }
    }

    fn play_again(&mut self) -> Result<bool, DriverError> {
        writeln!(self.output, "Play again? (y/n)")?;
        let answer = self.read_line()?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes") || is_restart(&answer))
    }
}

fn is_restart(line: &str) -> bool {
    line.eq_ignore_ascii_case(RESTART_COMMAND)
}

impl<R, W, N> Driver for TerminalDriver<R, W, N>
where
    R: BufRead,
    W: Write,
    N: Notifier,
{
    /// Play rounds until the player declines another. Returns the last round's outcome.
    fn play(&mut self) -> Result<Outcome, DriverError> {
        loop {
            let mut game = Game::with_rng(self.max_attempts, &mut self.rng);
            let Some(outcome) = self.play_round(&mut game)? else {
                continue;
            };
            info!("Round over: {}", outcome);
            if !self.play_again()? {
                return Ok(outcome);
            }
        }
    }
}
