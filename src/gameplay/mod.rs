//! Rock-paper-scissors rules.
//!
//! Everything here is pure: no I/O, no shared state. The session layer
//! calls [`resolve`] once both choices of a round are in.
mod choice;
mod outcome;

pub use choice::*;
pub use outcome::*;

/// Resolves one round, returning each player's outcome in argument order.
/// The two outcomes are always mirrors of each other.
pub fn resolve(a: Choice, b: Choice) -> (Outcome, Outcome) {
    let outcome = match (a.beats(b), b.beats(a)) {
        (true, _) => Outcome::Win,
        (_, true) => Outcome::Lose,
        _ => Outcome::Tie,
    };
    (outcome, outcome.mirror())
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn rock_crushes_scissors() {
        assert_eq!(
            resolve(Choice::Rock, Choice::Scissors),
            (Outcome::Win, Outcome::Lose)
        );
    }
    #[test]
    fn scissors_cut_paper() {
        assert_eq!(
            resolve(Choice::Scissors, Choice::Paper),
            (Outcome::Win, Outcome::Lose)
        );
    }
    #[test]
    fn paper_covers_rock() {
        assert_eq!(
            resolve(Choice::Rock, Choice::Paper),
            (Outcome::Lose, Outcome::Win)
        );
    }
    #[test]
    fn equal_choices_tie() {
        for c in Choice::all() {
            assert_eq!(resolve(c, c), (Outcome::Tie, Outcome::Tie));
        }
    }
    #[test]
    fn outcomes_are_mirror_consistent() {
        for a in Choice::all() {
            for b in Choice::all() {
                let (x, y) = resolve(a, b);
                let (z, w) = resolve(b, a);
                assert_eq!(x, y.mirror());
                assert_eq!(x, w);
                assert_eq!(y, z);
            }
        }
    }
}
