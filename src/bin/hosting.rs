//! hosting Server Binary
//!
//! Runs the HTTP server that pairs WebSocket clients into
//! rock-paper-scissors sessions.

use clap::Parser;
use rochambeau::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = hosting::Config::parse();
    log(&config.logs)?;
    hosting::Server::run(config).await?;
    Ok(())
}
