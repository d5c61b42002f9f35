use serde::Deserialize;
use serde::Serialize;

/// A hand shape thrown for one round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// Cyclic dominance: rock > scissors > paper > rock.
    pub fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Scissors, Self::Paper) | (Self::Paper, Self::Rock)
        )
    }
}

impl TryFrom<&str> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(anyhow::anyhow!("invalid choice: {}", s)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parse_valid_choices() {
        assert_eq!(Choice::try_from("rock").unwrap(), Choice::Rock);
        assert_eq!(Choice::try_from("paper").unwrap(), Choice::Paper);
        assert_eq!(Choice::try_from("scissors").unwrap(), Choice::Scissors);
    }
    #[test]
    fn parse_invalid_choices() {
        assert!(Choice::try_from("lizard").is_err());
        assert!(Choice::try_from("Rock").is_err());
        assert!(Choice::try_from("").is_err());
    }
    #[test]
    fn nothing_beats_itself() {
        assert!(Choice::all().iter().all(|c| !c.beats(*c)));
    }
    #[test]
    fn each_choice_beats_exactly_one() {
        for a in Choice::all() {
            assert_eq!(Choice::all().iter().filter(|b| a.beats(**b)).count(), 1);
        }
    }
    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Choice::Scissors).unwrap(), "\"scissors\"");
    }
}
