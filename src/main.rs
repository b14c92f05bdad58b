use driver::{direct::DirectDriver, terminal::TerminalDriver, Driver, DriverError};
use log::{error, info};

use config::{Config, Player};
use game::Game;
use notify::LogNotifier;

mod config;
mod driver;
mod game;
mod notify;
mod solver;

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or(());

    let config = Config::load()?;
    let result = match config.player {
        Player::Human => {
            let stdin = std::io::stdin();
            let mut driver =
                TerminalDriver::new(stdin.lock(), std::io::stdout(), LogNotifier, &config);
            driver.play()
        }
        Player::Bot => {
            let game = Game::with_rng(config.max_attempts, &mut config.rng());
            let mut driver = DirectDriver::new(game, LogNotifier);
            driver.play()
        }
    };

    match result {
        Ok(outcome) => {
            info!("Game complete, {}", outcome);
        }
        Err(DriverError::InputClosed) => {
            // Player walked away
            info!("Input closed, quitting");
        }
        Err(e) => {
            error!("An error occurred: {:?}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
