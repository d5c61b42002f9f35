use crate::gameplay::Choice;

/// Inbound intent from a connection, decoded once at the protocol boundary.
/// `Leave` never arrives over the wire; the transport injects it on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Choose(Choice),
    PlayAgain,
    Leave,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choose(choice) => write!(f, "choose {}", choice),
            Self::PlayAgain => write!(f, "play again"),
            Self::Leave => write!(f, "leave"),
        }
    }
}
