/// Position of a session within its per-round state machine.
///
/// ```text
/// AwaitingChoices ──both in──▶ Resolving ──scored──▶ RoundComplete
///        ▲                                                │
///        └──────────── both players play again ───────────┘
/// ```
///
/// Any phase moves to `Closed` when a player leaves.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    AwaitingChoices,
    Resolving,
    RoundComplete,
    Closed,
}

impl Phase {
    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingChoices => write!(f, "awaiting choices"),
            Self::Resolving => write!(f, "resolving"),
            Self::RoundComplete => write!(f, "round complete"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
