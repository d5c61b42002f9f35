use super::*;
use crate::Connection;
use crate::ID;
use crate::Scores;
use crate::Unique;
use crate::gameplay::Choice;

/// A server message addressed to exactly one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub to: ID<Connection>,
    pub message: ServerMessage,
}

/// Paired state for two connections playing consecutive rounds.
///
/// Functional core: every transition returns the messages it produces
/// instead of sending them, so the caller decides how and when they hit
/// the network. The caller also serializes access; a session assumes one
/// command at a time.
///
/// - Choice slots fill at most once per round
/// - Both slots filled resolves the round immediately
/// - A new round needs both players to ask for it
/// - Either player leaving closes the session for good
#[derive(Debug)]
pub struct Session {
    id: ID<Self>,
    phase: Phase,
    scores: Scores,
    ready: [bool; 2],
    choices: [Option<Choice>; 2],
    players: [ID<Connection>; 2],
}

impl Session {
    pub fn new(p1: ID<Connection>, p2: ID<Connection>) -> Self {
        Self {
            id: ID::default(),
            phase: Phase::AwaitingChoices,
            scores: [0, 0],
            ready: [false, false],
            choices: [None, None],
            players: [p1, p2],
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn scores(&self) -> Scores {
        self.scores
    }
    pub fn player(&self, seat: Seat) -> ID<Connection> {
        self.players[seat.index()]
    }
    pub fn choice(&self, seat: Seat) -> Option<Choice> {
        self.choices[seat.index()]
    }
    pub fn seat(&self, connection: ID<Connection>) -> Option<Seat> {
        Seat::both()
            .into_iter()
            .find(|seat| self.player(*seat) == connection)
    }
}

impl Session {
    /// Announces the pairing and the first round to both players.
    pub fn open(&self) -> Vec<Delivery> {
        log::info!(
            "[session {}] opened {} vs {}",
            self.id,
            self.player(Seat::P1),
            self.player(Seat::P2)
        );
        let mut deliveries = self.broadcast(ServerMessage::game_start());
        deliveries.extend(self.broadcast(ServerMessage::round_start(self.scores)));
        deliveries
    }

    pub fn apply(&mut self, seat: Seat, command: Command) -> Vec<Delivery> {
        match command {
            Command::Choose(choice) => self.submit(seat, choice),
            Command::PlayAgain => self.play_again(seat),
            Command::Leave => self.leave(seat),
        }
    }

    pub fn submit(&mut self, seat: Seat, choice: Choice) -> Vec<Delivery> {
        if self.phase != Phase::AwaitingChoices {
            log::debug!("[session {}] {} chose while {}", self.id, seat, self.phase);
            return Vec::new();
        }
        if self.choice(seat).is_some() {
            log::debug!("[session {}] {} already chose", self.id, seat);
            return Vec::new();
        }
        self.choices[seat.index()] = Some(choice);
        match self.choice(seat.other()) {
            None => vec![self.unicast(seat, ServerMessage::choice_made(choice))],
            Some(_) => {
                self.phase = Phase::Resolving;
                self.resolve()
            }
        }
    }

    pub fn play_again(&mut self, seat: Seat) -> Vec<Delivery> {
        if self.phase != Phase::RoundComplete {
            log::debug!("[session {}] {} asked to replay while {}", self.id, seat, self.phase);
            return Vec::new();
        }
        self.ready[seat.index()] = true;
        if !self.ready.iter().all(|r| *r) {
            return Vec::new();
        }
        self.ready = [false, false];
        self.choices = [None, None];
        self.phase = Phase::AwaitingChoices;
        self.broadcast(ServerMessage::round_start(self.scores))
    }

    pub fn leave(&mut self, seat: Seat) -> Vec<Delivery> {
        if self.phase.is_closed() {
            return Vec::new();
        }
        log::info!("[session {}] {} left while {}", self.id, seat, self.phase);
        self.phase = Phase::Closed;
        vec![self.unicast(seat.other(), ServerMessage::opponent_left(seat))]
    }
}

impl Session {
    fn resolve(&mut self) -> Vec<Delivery> {
        let (Some(a), Some(b)) = (self.choice(Seat::P1), self.choice(Seat::P2)) else {
            return Vec::new();
        };
        let (first, second) = crate::gameplay::resolve(a, b);
        Seat::both()
            .into_iter()
            .zip([first, second])
            .filter(|(_, outcome)| outcome.is_win())
            .for_each(|(seat, _)| self.scores[seat.index()] += 1);
        self.phase = Phase::RoundComplete;
        log::info!(
            "[session {}] {} vs {}: P1 {} ({}-{})",
            self.id,
            a,
            b,
            first,
            self.scores[0],
            self.scores[1]
        );
        vec![
            self.unicast(Seat::P1, ServerMessage::result(first, a, b, self.scores)),
            self.unicast(Seat::P2, ServerMessage::result(second, b, a, self.scores)),
        ]
    }

    fn unicast(&self, seat: Seat, message: ServerMessage) -> Delivery {
        Delivery {
            to: self.player(seat),
            message,
        }
    }

    fn broadcast(&self, message: ServerMessage) -> Vec<Delivery> {
        Seat::both()
            .into_iter()
            .map(|seat| self.unicast(seat, message.clone()))
            .collect()
    }
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
