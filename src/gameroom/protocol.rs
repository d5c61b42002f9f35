use super::*;
use crate::gameplay::Choice;
use serde_json::Value;

/// Reasons an inbound frame could not become a [`Command`].
/// The display text is what the client receives in an `error` message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Malformed(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("unknown message type: {0}")]
    UnknownType(String),
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
    #[error("binary messages are not supported")]
    Unsupported,
}

/// Handles wire text to Command conversion.
/// Centralizes the protocol layer between client JSON and session commands.
pub struct Protocol;

impl Protocol {
    /// Parses a client message string into a Command.
    pub fn decode(s: &str) -> Result<Command, ProtocolError> {
        let value = serde_json::from_str::<Value>(s)
            .map_err(|e| ProtocolError::Malformed(e.to_string()))?;
        match Self::field(&value, "type")? {
            "choice" => Self::field(&value, "choice").and_then(Self::choice).map(Command::Choose),
            "play_again" => Ok(Command::PlayAgain),
            other => Err(ProtocolError::UnknownType(other.to_string())),
        }
    }
    fn field<'a>(value: &'a Value, name: &'static str) -> Result<&'a str, ProtocolError> {
        value
            .get(name)
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingField(name))
    }
    fn choice(s: &str) -> Result<Choice, ProtocolError> {
        Choice::try_from(s).map_err(|_| ProtocolError::InvalidChoice(s.to_string()))
    }
}
