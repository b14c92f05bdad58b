use anyhow::Context;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use std::{env, fs, path::Path};
use thiserror::Error;

use crate::game::DEFAULT_MAX_ATTEMPTS;

/// Env var holding the path to a JSON config file.
pub const CONFIG_PATH_VAR: &str = "GUESS_CONFIG";
pub const MAX_ATTEMPTS_VAR: &str = "GUESS_MAX_ATTEMPTS";
pub const SEED_VAR: &str = "GUESS_SEED";
pub const PLAYER_VAR: &str = "GUESS_PLAYER";

/// Who is playing.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Player {
    /// A person at the terminal.
    #[default]
    Human,
    /// The solver.
    Bot,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Guesses allowed per game.
    pub max_attempts: u32,
    /// Seed for choosing targets. Random if not set.
    pub seed: Option<u64>,
    pub player: Player,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max attempts must be at least 1")]
    NoAttempts,
    #[error("invalid value {value:?} for {var}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("invalid value for {}", PLAYER_VAR)]
    InvalidPlayer(#[from] serde_plain::Error),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            player: Player::Human,
        }
    }
}

impl Config {
    /// Load from the file named by `GUESS_CONFIG` (if set), then apply env var overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var_os(CONFIG_PATH_VAR);
        Config::load_from(path.as_deref().map(Path::new), |var| env::var(var).ok())
    }

    /// Load from `path` (if any), then apply overrides from `lookup`.
    pub fn load_from<F>(path: Option<&Path>, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("failed to load config from {:?}", path))?,
            None => Config::default(),
        };
        config
            .apply_overrides(lookup)
            .context("bad config override")?;
        config.validate()?;
        debug!("Loaded config {:?}", config);
        Ok(config)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Config::from_json(&contents)?)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Override fields with whatever `lookup` returns for each env var name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MAX_ATTEMPTS_VAR) {
            self.max_attempts = parse_number(MAX_ATTEMPTS_VAR, value)?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            self.seed = Some(parse_number(SEED_VAR, value)?);
        }
        if let Some(value) = lookup(PLAYER_VAR) {
            self.player = serde_plain::from_str(value.trim())?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }

    /// RNG for choosing targets.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_number<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber { var, value, source })
}
