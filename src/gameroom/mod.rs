//! Two-player sessions and the wire protocol they speak.
//!
//! ## Architecture
//!
//! - [`Session`] — Round state machine owning both seats, choices, and scores
//! - [`Phase`] — Where a session is within the current round
//! - [`Seat`] — Player 1 or Player 2
//!
//! ## Protocol
//!
//! - [`Command`] — Decoded inbound intent, produced once by [`Protocol::decode`]
//! - [`ServerMessage`] — Outbound JSON records, tagged by `type`
//! - [`Delivery`] — A server message addressed to one connection
mod command;
mod message;
mod phase;
mod protocol;
mod seat;
mod session;

pub use command::*;
pub use message::*;
pub use phase::*;
pub use protocol::*;
pub use seat::*;
pub use session::*;
