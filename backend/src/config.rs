// backend/src/config.rs

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "suraksha_backend", about = "Suraksha Sakhi report server")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "SURAKSHA_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// SQLite database file; created if missing
    #[arg(long, env = "SURAKSHA_DB", default_value = "./data/suraksha.db")]
    pub db: PathBuf,

    /// Built frontend bundle served for every non-API path
    #[arg(long, env = "SURAKSHA_STATIC_DIR", default_value = "./frontend/dist/public")]
    pub static_dir: PathBuf,
}
