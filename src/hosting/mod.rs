//! WebSocket game hosting infrastructure.
//!
//! ## Core Types
//!
//! - [`Registry`] — Every live connection and its pairing state
//! - [`Lobby`] — First-come first-served matchmaking queue
//! - [`Casino`] — Dispatcher routing commands to the lobby or a session
//!
//! ## Server
//!
//! With the `server` feature, [`Server`] exposes the casino over actix-web
//! and [`Config`] parses its command line.
mod casino;
mod lobby;
mod registry;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod server;

pub use casino::*;
pub use lobby::*;
pub use registry::*;
#[cfg(feature = "server")]
pub use config::*;
#[cfg(feature = "server")]
pub use server::*;
