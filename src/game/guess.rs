use rand::Rng;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Smallest number the target (or a guess) can be.
pub const MIN_GUESS: u32 = 1;
/// Largest number the target (or a guess) can be.
pub const MAX_GUESS: u32 = 100;

/// A number in `MIN_GUESS..=MAX_GUESS`. Used both for guesses and for the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guess(u32);

/// Why a guess was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a guess")]
    Empty,
    #[error("Please enter a number between {} and {}", MIN_GUESS, MAX_GUESS)]
    NotANumber(String),
    #[error("Please enter a number between {} and {}", MIN_GUESS, MAX_GUESS)]
    OutOfRange(i64),
    #[error("the game is over, start a new one to keep guessing")]
    Finished,
}

impl Guess {
    pub fn new(value: u32) -> Result<Self, GuessError> {
        if (MIN_GUESS..=MAX_GUESS).contains(&value) {
            Ok(Guess(value))
        } else {
            Err(GuessError::OutOfRange(value.into()))
        }
    }

    /// A uniformly random number in the guessing range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Guess(rng.gen_range(MIN_GUESS..=MAX_GUESS))
    }

    /// The closest number in the guessing range to `value`.
    pub fn clamped(value: i64) -> Self {
        Guess(value.clamp(MIN_GUESS.into(), MAX_GUESS.into()) as u32)
    }

    /// The number halfway between two guesses, rounding down.
    pub fn midpoint(self, other: Guess) -> Self {
        Guess((self.0 + other.0) / 2)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Signed difference `self - other`.
    pub fn difference(self, other: Guess) -> i32 {
        self.0 as i32 - other.0 as i32
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GuessError::Empty);
        }
        let value = s
            .parse::<i64>()
            .map_err(|_| GuessError::NotANumber(s.to_owned()))?;
        match u32::try_from(value) {
            Ok(value) => Guess::new(value),
            Err(_) => Err(GuessError::OutOfRange(value)),
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Guess, GuessError};

    #[test]
    fn parse_valid() {
        assert_eq!("1".parse::<Guess>().unwrap().value(), 1);
        assert_eq!("100".parse::<Guess>().unwrap().value(), 100);
        // Surrounding whitespace (e.g. a trailing newline) is ignored
        assert_eq!(" 42\n".parse::<Guess>().unwrap().value(), 42);
    }

    #[test]
    fn parse_empty() {
        assert_eq!("".parse::<Guess>(), Err(GuessError::Empty));
        assert_eq!("  \n".parse::<Guess>(), Err(GuessError::Empty));
    }

    #[test]
    fn parse_not_a_number() {
        assert_eq!(
            "fifty".parse::<Guess>(),
            Err(GuessError::NotANumber("fifty".into()))
        );
        assert_eq!(
            "4.5".parse::<Guess>(),
            Err(GuessError::NotANumber("4.5".into()))
        );
        // Too big to even be a number we care about
        assert!(matches!(
            "99999999999999999999999".parse::<Guess>(),
            Err(GuessError::NotANumber(_))
        ));
    }

    #[test]
    fn parse_out_of_range() {
        assert_eq!("0".parse::<Guess>(), Err(GuessError::OutOfRange(0)));
        assert_eq!("101".parse::<Guess>(), Err(GuessError::OutOfRange(101)));
        assert_eq!("-5".parse::<Guess>(), Err(GuessError::OutOfRange(-5)));
        assert_eq!(Guess::new(1000), Err(GuessError::OutOfRange(1000)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(GuessError::Empty.to_string(), "Please enter a guess");
        assert_eq!(
            GuessError::OutOfRange(0).to_string(),
            "Please enter a number between 1 and 100"
        );
        assert_eq!(
            GuessError::NotANumber("x".into()).to_string(),
            "Please enter a number between 1 and 100"
        );
    }

    #[test]
    fn difference() {
        let a = Guess::new(48).unwrap();
        let b = Guess::new(50).unwrap();
        assert_eq!(a.difference(b), -2);
        assert_eq!(b.difference(a), 2);
        assert_eq!(a.difference(a), 0);
    }

    #[test]
    fn clamped_and_midpoint() {
        assert_eq!(Guess::clamped(-20).value(), 1);
        assert_eq!(Guess::clamped(150).value(), 100);
        assert_eq!(Guess::clamped(37).value(), 37);
        let a = Guess::new(61).unwrap();
        let b = Guess::new(100).unwrap();
        assert_eq!(a.midpoint(b).value(), 80);
        assert_eq!(a.midpoint(a), a);
    }
}
