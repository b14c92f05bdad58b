use super::{Solver, SolverError};
use crate::game::{Game, Guess, GuessResult, Hint, DEFAULT_MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS};

fn guess(value: u32) -> Guess {
    Guess::new(value).unwrap()
}

#[test]
fn starts_in_the_middle() {
    let solver = Solver::default();
    assert_eq!(solver.candidates(), 1..=100);
    assert_eq!(solver.next_guess(), guess(50));
}

#[test]
fn narrows_above() {
    let mut solver = Solver::default();
    solver.observe(guess(50), Hint::VeryCloseHigher).unwrap();
    assert_eq!(solver.candidates(), 51..=52);

    let mut solver = Solver::default();
    solver.observe(guess(50), Hint::CloseHigher).unwrap();
    assert_eq!(solver.candidates(), 53..=60);

    let mut solver = Solver::default();
    solver.observe(guess(50), Hint::TooLow).unwrap();
    assert_eq!(solver.candidates(), 61..=100);
}

#[test]
fn narrows_below() {
    let mut solver = Solver::default();
    solver.observe(guess(50), Hint::VeryCloseLower).unwrap();
    assert_eq!(solver.candidates(), 48..=49);

    let mut solver = Solver::default();
    solver.observe(guess(50), Hint::CloseLower).unwrap();
    assert_eq!(solver.candidates(), 40..=47);

    let mut solver = Solver::default();
    solver.observe(guess(50), Hint::TooHigh).unwrap();
    assert_eq!(solver.candidates(), 1..=39);
}

#[test]
fn narrows_near_the_edges() {
    let mut solver = Solver::default();
    solver.observe(guess(2), Hint::VeryCloseLower).unwrap();
    assert_eq!(solver.candidates(), 1..=1);
    assert_eq!(solver.next_guess(), guess(1));
}

#[test]
fn contradictory_hints() {
    let mut solver = Solver::default();
    solver.observe(guess(50), Hint::TooLow).unwrap();
    assert_eq!(
        solver.observe(guess(70), Hint::TooHigh),
        Err(SolverError::Inconsistent {
            guess: guess(70),
            hint: Hint::TooHigh
        })
    );
    // Candidates are untouched by a rejected hint
    assert_eq!(solver.candidates(), 61..=100);

    // A hint that can't happen at all inside the range
    let mut solver = Solver::default();
    assert!(solver.observe(guess(5), Hint::TooHigh).is_err());
}

#[test]
fn always_wins_within_default_attempts() {
    for target in MIN_GUESS..=MAX_GUESS {
        let mut game = Game::with_target(guess(target), DEFAULT_MAX_ATTEMPTS);
        let mut solver = Solver::default();
        loop {
            let next = solver.next_guess();
            match game.guess(next).unwrap() {
                GuessResult::Continue { hint, .. } => solver.observe(next, hint).unwrap(),
                GuessResult::Win { attempts_used } => {
                    assert!(attempts_used <= DEFAULT_MAX_ATTEMPTS);
                    break;
                }
                GuessResult::Lose { .. } => panic!("lost with target {}", target),
            }
        }
    }
}
