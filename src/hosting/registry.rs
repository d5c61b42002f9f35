use crate::Connection;
use crate::ID;
use crate::gameroom::Delivery;
use crate::gameroom::Seat;
use crate::gameroom::ServerMessage;
use crate::gameroom::Session;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

/// Where a connection stands with respect to matchmaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Unpaired and not queued, e.g. after an opponent left.
    Idle,
    /// Unpaired and parked in the lobby.
    Queued,
    /// Playing in a session.
    Seated { session: ID<Session>, seat: Seat },
}

/// One live client. The outbox is the only way to reach it.
#[derive(Debug)]
pub struct Peer {
    outbox: UnboundedSender<String>,
    pairing: Pairing,
}

impl Peer {
    pub fn pairing(&self) -> Pairing {
        self.pairing
    }
}

/// Every live connection, keyed by id.
/// A connection that is not here is closed.
#[derive(Debug, Default)]
pub struct Registry {
    connections: RwLock<HashMap<ID<Connection>, Peer>>,
}

impl Registry {
    pub async fn register(&self, outbox: UnboundedSender<String>) -> ID<Connection> {
        let id = ID::default();
        let peer = Peer {
            outbox,
            pairing: Pairing::Idle,
        };
        self.connections.write().await.insert(id, peer);
        log::debug!("[registry] registered {}", id);
        id
    }
    /// Removes the connection and drops its outbox, closing the channel.
    /// Returns whether anything was removed.
    pub async fn unregister(&self, id: ID<Connection>) -> bool {
        self.connections
            .write()
            .await
            .remove(&id)
            .inspect(|_| log::debug!("[registry] unregistered {}", id))
            .is_some()
    }
    pub async fn pairing(&self, id: ID<Connection>) -> Option<Pairing> {
        self.connections
            .read()
            .await
            .get(&id)
            .map(Peer::pairing)
    }
    pub async fn set_pairing(&self, id: ID<Connection>, pairing: Pairing) {
        match self.connections.write().await.get_mut(&id) {
            Some(peer) => peer.pairing = pairing,
            None => log::debug!("[registry] cannot pair closed {}", id),
        }
    }
    /// Best-effort push. A closed peer is logged and skipped.
    pub async fn send(&self, id: ID<Connection>, message: &ServerMessage) {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[registry] failed to encode {}: {}", message.kind(), e);
                return;
            }
        };
        match self.connections.read().await.get(&id) {
            Some(peer) => {
                if peer.outbox.send(json).is_err() {
                    log::debug!("[registry] {} hung up before {}", id, message.kind());
                }
            }
            None => log::debug!("[registry] dropped {} for closed {}", message.kind(), id),
        }
    }
    pub async fn deliver(&self, deliveries: Vec<Delivery>) {
        for Delivery { to, message } in deliveries {
            self.send(to, &message).await;
        }
    }
    /// Number of live connections.
    pub async fn count(&self) -> usize {
        self.connections.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    #[tokio::test]
    async fn registered_connections_start_idle() {
        let registry = Registry::default();
        let (tx, _rx) = unbounded_channel();
        let id = registry.register(tx).await;
        assert_eq!(registry.pairing(id).await, Some(Pairing::Idle));
        assert_eq!(registry.count().await, 1);
    }
    #[tokio::test]
    async fn send_reaches_only_the_addressee() {
        let registry = Registry::default();
        let (tx1, mut rx1) = unbounded_channel();
        let (tx2, mut rx2) = unbounded_channel();
        let a = registry.register(tx1).await;
        let _ = registry.register(tx2).await;
        registry.send(a, &ServerMessage::waiting()).await;
        let json = rx1.try_recv().unwrap();
        assert!(json.contains(r#""type":"waiting""#));
        assert!(rx2.try_recv().is_err());
    }
    #[tokio::test]
    async fn unregister_is_idempotent_and_closes_outbox() {
        let registry = Registry::default();
        let (tx, mut rx) = unbounded_channel();
        let id = registry.register(tx).await;
        assert!(registry.unregister(id).await);
        assert!(!registry.unregister(id).await);
        assert_eq!(registry.count().await, 0);
        assert!(rx.recv().await.is_none());
    }
    #[tokio::test]
    async fn sending_to_closed_connection_is_silent() {
        let registry = Registry::default();
        let (tx, rx) = unbounded_channel();
        let id = registry.register(tx).await;
        drop(rx);
        registry.send(id, &ServerMessage::waiting()).await;
        registry.unregister(id).await;
        registry.send(id, &ServerMessage::waiting()).await;
        registry.set_pairing(id, Pairing::Queued).await;
        assert_eq!(registry.pairing(id).await, None);
    }
}
