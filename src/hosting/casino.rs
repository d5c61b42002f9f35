use super::*;
use crate::Connection;
use crate::ID;
use crate::Unique;
use crate::gameroom::*;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

/// Point-in-time counts for the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub connections: usize,
    pub waiting: usize,
    pub sessions: usize,
}

/// Routes every inbound command to the lobby or the owning session
/// and pushes whatever they produce back out through the registry.
///
/// Locking:
/// - each session has its own mutex, so two players never race on one round
/// - the lobby mutex serializes pairing across all connections
/// - the registry and session map are only held briefly, never while
///   waiting on a session mutex
///
/// Deliveries are pushed while the producing lock is still held so that
/// each client sees messages in the order its session emitted them.
#[derive(Default)]
pub struct Casino {
    registry: Registry,
    lobby: Mutex<Lobby>,
    sessions: RwLock<HashMap<ID<Session>, Arc<Mutex<Session>>>>,
}

impl Casino {
    /// Registers a new connection and puts it straight into matchmaking.
    pub async fn connect(&self, outbox: UnboundedSender<String>) -> ID<Connection> {
        let id = self.registry.register(outbox).await;
        log::info!("[casino] {} connected", id);
        self.enqueue(id).await;
        id
    }

    /// Decodes a raw text frame and executes it.
    pub async fn dispatch(&self, id: ID<Connection>, text: &str) {
        match Protocol::decode(text) {
            Ok(command) => self.command(id, command).await,
            Err(e) => self.reject(id, e).await,
        }
    }

    /// Answers a bad frame with an `error` to its sender only.
    pub async fn reject(&self, id: ID<Connection>, error: ProtocolError) {
        log::warn!("[casino] rejected frame from {}: {}", id, error);
        self.registry.send(id, &ServerMessage::error(error)).await;
    }

    pub async fn command(&self, id: ID<Connection>, command: Command) {
        if command == Command::Leave {
            return self.disconnect(id).await;
        }
        match self.registry.pairing(id).await {
            Some(Pairing::Seated { session, seat }) => self.play(session, seat, command).await,
            Some(Pairing::Idle) if command == Command::PlayAgain => self.enqueue(id).await,
            Some(pairing) => log::debug!("[casino] ignored {} from {} ({:?})", command, id, pairing),
            None => log::debug!("[casino] ignored {} from closed {}", command, id),
        }
    }

    /// Tears down everything a connection is part of. Safe to call twice.
    pub async fn disconnect(&self, id: ID<Connection>) {
        if self.lobby.lock().await.remove(id) {
            log::debug!("[casino] {} left the queue", id);
        }
        if let Some(Pairing::Seated { session, seat }) = self.registry.pairing(id).await {
            self.release(session, seat).await;
        }
        if self.registry.unregister(id).await {
            log::info!("[casino] {} disconnected", id);
        }
    }

    pub async fn stats(&self) -> Stats {
        Stats {
            connections: self.registry.count().await,
            waiting: self.lobby.lock().await.waiting(),
            sessions: self.sessions.read().await.len(),
        }
    }
}

impl Casino {
    async fn enqueue(&self, id: ID<Connection>) {
        let mut lobby = self.lobby.lock().await;
        if self.registry.pairing(id).await != Some(Pairing::Idle) {
            return log::debug!("[casino] {} is not idle, not queueing", id);
        }
        match lobby.admit(id) {
            Admission::Parked => {
                self.registry.set_pairing(id, Pairing::Queued).await;
                self.registry
                    .deliver(vec![
                        Delivery {
                            to: id,
                            message: ServerMessage::connected(Seat::P1),
                        },
                        Delivery {
                            to: id,
                            message: ServerMessage::waiting(),
                        },
                    ])
                    .await;
                log::debug!("[casino] {} waiting for an opponent", id);
            }
            Admission::Matched(session) => {
                let sid = session.id();
                let players = Seat::both().map(|seat| (seat, session.player(seat)));
                let mut deliveries = vec![Delivery {
                    to: id,
                    message: ServerMessage::connected(Seat::P2),
                }];
                deliveries.extend(session.open());
                // a Seated pairing must always resolve to a live session
                self.sessions
                    .write()
                    .await
                    .insert(sid, Arc::new(Mutex::new(session)));
                for (seat, player) in players {
                    let pairing = Pairing::Seated { session: sid, seat };
                    self.registry.set_pairing(player, pairing).await;
                }
                self.registry.deliver(deliveries).await;
            }
        }
    }

    async fn play(&self, sid: ID<Session>, seat: Seat, command: Command) {
        let Some(session) = self.session(sid).await else {
            return log::debug!("[casino] session {} already released", sid);
        };
        let mut session = session.lock().await;
        let deliveries = session.apply(seat, command);
        self.registry.deliver(deliveries).await;
    }

    async fn release(&self, sid: ID<Session>, seat: Seat) {
        let Some(session) = self.session(sid).await else {
            return;
        };
        let mut session = session.lock().await;
        let deliveries = session.leave(seat);
        let survivor = session.player(seat.other());
        if let Some(Pairing::Seated { session: s, .. }) = self.registry.pairing(survivor).await {
            if s == sid {
                self.registry.set_pairing(survivor, Pairing::Idle).await;
            }
        }
        self.registry.deliver(deliveries).await;
        self.sessions.write().await.remove(&sid);
        log::info!("[casino] released session {}", sid);
    }

    async fn session(&self, sid: ID<Session>) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(&sid).cloned()
    }
}
