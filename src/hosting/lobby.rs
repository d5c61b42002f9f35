use crate::Connection;
use crate::ID;
use crate::gameroom::Session;
use std::collections::VecDeque;

/// What happened to a connection that asked for a game.
#[derive(Debug)]
pub enum Admission {
    /// No one was waiting; the connection is now at the back of the queue.
    Parked,
    /// Paired with the oldest waiting connection, who takes Player 1.
    Matched(Session),
}

/// First-come first-served matchmaking queue.
#[derive(Debug, Default)]
pub struct Lobby {
    queue: VecDeque<ID<Connection>>,
}

impl Lobby {
    pub fn admit(&mut self, id: ID<Connection>) -> Admission {
        match self.queue.pop_front() {
            Some(oldest) if oldest != id => Admission::Matched(Session::new(oldest, id)),
            Some(_) | None => {
                self.queue.push_back(id);
                Admission::Parked
            }
        }
    }
    pub fn remove(&mut self, id: ID<Connection>) -> bool {
        let before = self.queue.len();
        self.queue.retain(|waiting| *waiting != id);
        self.queue.len() != before
    }
    /// Number of connections parked in the queue.
    pub fn waiting(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameroom::Seat;
    #[test]
    fn first_arrival_is_parked() {
        let mut lobby = Lobby::default();
        let id = ID::default();
        assert!(matches!(lobby.admit(id), Admission::Parked));
        assert!(lobby.queue.contains(&id));
    }
    #[test]
    fn second_arrival_pairs_with_first_as_p2() {
        let mut lobby = Lobby::default();
        let c1 = ID::default();
        let c2 = ID::default();
        lobby.admit(c1);
        match lobby.admit(c2) {
            Admission::Matched(session) => {
                assert_eq!(session.player(Seat::P1), c1);
                assert_eq!(session.player(Seat::P2), c2);
            }
            Admission::Parked => panic!("expected a match"),
        }
        assert_eq!(lobby.waiting(), 0);
    }
    #[test]
    fn third_arrival_waits() {
        let mut lobby = Lobby::default();
        let c3 = ID::default();
        lobby.admit(ID::default());
        lobby.admit(ID::default());
        assert!(matches!(lobby.admit(c3), Admission::Parked));
        assert_eq!(lobby.waiting(), 1);
    }
    #[test]
    fn queue_is_strictly_fifo() {
        let mut lobby = Lobby::default();
        let c1 = ID::default();
        let c2 = ID::default();
        let c3 = ID::default();
        lobby.queue.extend([c1, c2]);
        match lobby.admit(c3) {
            Admission::Matched(session) => assert_eq!(session.player(Seat::P1), c1),
            Admission::Parked => panic!("expected a match"),
        }
        assert!(lobby.queue.contains(&c2));
    }
    #[test]
    fn readmitting_the_head_does_not_self_pair() {
        let mut lobby = Lobby::default();
        let id = ID::default();
        lobby.admit(id);
        assert!(matches!(lobby.admit(id), Admission::Parked));
        assert_eq!(lobby.waiting(), 1);
    }
    #[test]
    fn remove_drops_waiting_connection() {
        let mut lobby = Lobby::default();
        let id = ID::default();
        lobby.admit(id);
        assert!(lobby.remove(id));
        assert!(!lobby.remove(id));
        assert_eq!(lobby.waiting(), 0);
    }
}
