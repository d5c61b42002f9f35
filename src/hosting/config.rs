use std::path::PathBuf;

/// Command line and environment settings for the hosting server.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "hosting", about = "Rock-paper-scissors matchmaking server")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,
    /// Number of actix worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Directory for timestamped debug logs.
    #[arg(long, env = "LOG_DIR", default_value = "logs")]
    pub logs: PathBuf,
    /// Directory holding the browser client, served at `/`.
    #[arg(long = "static", env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}
