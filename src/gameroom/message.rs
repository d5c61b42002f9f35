use super::Seat;
use crate::Scores;
use crate::gameplay::Choice;
use crate::gameplay::Outcome;
use serde::Serialize;

/// Messages sent from server to client over WebSocket.
/// Field names are what the browser client reads; keep them as they are.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Identity the client will play under if paired.
    Connected { player_num: u8, message: String },
    /// Parked in the matchmaking queue.
    Waiting { message: String },
    /// An opponent was found.
    GameStart { message: String },
    /// A new round begins with the scores so far.
    RoundStart { message: String, scores: Scores },
    /// The sender's choice is locked in and the opponent is still deciding.
    ChoiceMade { choice: Choice, message: String },
    /// Round outcome from the recipient's point of view.
    #[serde(rename = "result")]
    RoundEnd {
        result: Outcome,
        your_choice: Choice,
        opponent_choice: Choice,
        scores: Scores,
    },
    /// The other player disconnected.
    OpponentLeft { message: String },
    /// The last inbound message was rejected.
    Error { message: String },
}

impl ServerMessage {
    pub fn connected(seat: Seat) -> Self {
        Self::Connected {
            player_num: seat.number(),
            message: format!("You are {}", seat),
        }
    }
    pub fn waiting() -> Self {
        Self::Waiting {
            message: "Waiting for opponent...".to_string(),
        }
    }
    pub fn game_start() -> Self {
        Self::GameStart {
            message: "Opponent found! Game starting...".to_string(),
        }
    }
    pub fn round_start(scores: Scores) -> Self {
        Self::RoundStart {
            message: "Make your choice!".to_string(),
            scores,
        }
    }
    pub fn choice_made(choice: Choice) -> Self {
        Self::ChoiceMade {
            choice,
            message: format!("You chose {}", choice),
        }
    }
    pub fn result(result: Outcome, mine: Choice, theirs: Choice, scores: Scores) -> Self {
        Self::RoundEnd {
            result,
            your_choice: mine,
            opponent_choice: theirs,
            scores,
        }
    }
    pub fn opponent_left(seat: Seat) -> Self {
        Self::OpponentLeft {
            message: format!("{} left the game", seat),
        }
    }
    pub fn error<E>(e: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Error {
            message: e.to_string(),
        }
    }
    /// Wire discriminator, handy for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::Waiting { .. } => "waiting",
            Self::GameStart { .. } => "game_start",
            Self::RoundStart { .. } => "round_start",
            Self::ChoiceMade { .. } => "choice_made",
            Self::RoundEnd { .. } => "result",
            Self::OpponentLeft { .. } => "opponent_left",
            Self::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    #[test]
    fn result_uses_client_field_names() {
        let msg = ServerMessage::result(Outcome::Win, Choice::Rock, Choice::Scissors, [1, 0]);
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "type": "result",
                "result": "win",
                "your_choice": "rock",
                "opponent_choice": "scissors",
                "scores": [1, 0],
            })
        );
    }
    #[test]
    fn connected_carries_player_num() {
        let msg = serde_json::to_value(ServerMessage::connected(Seat::P2)).unwrap();
        assert_eq!(msg["type"], "connected");
        assert_eq!(msg["player_num"], 2);
        assert_eq!(msg["message"], "You are Player 2");
    }
    #[test]
    fn round_start_scores_are_ordered_pair() {
        let msg = serde_json::to_value(ServerMessage::round_start([3, 5])).unwrap();
        assert_eq!(msg["type"], "round_start");
        assert_eq!(msg["scores"], json!([3, 5]));
    }
    #[test]
    fn kind_matches_serialized_tag() {
        for msg in [
            ServerMessage::connected(Seat::P1),
            ServerMessage::waiting(),
            ServerMessage::game_start(),
            ServerMessage::round_start([0, 0]),
            ServerMessage::choice_made(Choice::Paper),
            ServerMessage::result(Outcome::Tie, Choice::Paper, Choice::Paper, [0, 0]),
            ServerMessage::opponent_left(Seat::P1),
            ServerMessage::error("bad"),
        ] {
            assert_eq!(serde_json::to_value(&msg).unwrap()["type"], msg.kind());
        }
    }
}
