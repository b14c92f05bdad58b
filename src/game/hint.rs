use std::ops::RangeInclusive;
use strum::{Display, EnumIter};

use super::guess::{MAX_GUESS, MIN_GUESS};

/// Largest possible distance between a guess and the target.
const SPAN: i32 = (MAX_GUESS - MIN_GUESS) as i32;

/// Directional feedback after a wrong guess. "Lower" and "higher" say where the target is
/// relative to the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Hint {
    /// Guess is 1 or 2 above the target.
    #[strum(to_string = "Very close, just a bit lower!")]
    VeryCloseLower,
    /// Guess is 3 to 10 above the target.
    #[strum(to_string = "Close, but a bit lower.")]
    CloseLower,
    /// Guess is more than 10 above the target.
    #[strum(to_string = "Too high! Try a much lower number.")]
    TooHigh,
    /// Guess is 1 or 2 below the target.
    #[strum(to_string = "Very close, just a bit higher!")]
    VeryCloseHigher,
    /// Guess is 3 to 10 below the target.
    #[strum(to_string = "Close, but a bit higher.")]
    CloseHigher,
    /// Guess is more than 10 below the target.
    #[strum(to_string = "Too low! Try a much higher number.")]
    TooLow,
}

impl Hint {
    /// The hint for a guess that is `difference` (guess minus target) away from the target.
    /// A difference of zero is a correct guess and has no hint.
    pub fn from_difference(difference: i32) -> Option<Hint> {
        match difference {
            0 => None,
            1..=2 => Some(Hint::VeryCloseLower),
            3..=10 => Some(Hint::CloseLower),
            11..=i32::MAX => Some(Hint::TooHigh),
            -2..=-1 => Some(Hint::VeryCloseHigher),
            -10..=-3 => Some(Hint::CloseHigher),
            i32::MIN..=-11 => Some(Hint::TooLow),
        }
    }

    /// Every difference (guess minus target) that produces this hint, limited to what is
    /// reachable inside the guessing range.
    pub fn difference_range(&self) -> RangeInclusive<i32> {
        match self {
            Hint::VeryCloseLower => 1..=2,
            Hint::CloseLower => 3..=10,
            Hint::TooHigh => 11..=SPAN,
            Hint::VeryCloseHigher => -2..=-1,
            Hint::CloseHigher => -10..=-3,
            Hint::TooLow => -SPAN..=-11,
        }
    }
}
