use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};

use crate::store::json::SEED_PATH;

#[derive(Parser, Debug)]
#[command(name = "rolodex-api", version, about = "Contact book served over HTTP")]
pub struct Cli {
    /// JSON file with the contacts loaded at startup (never written back)
    #[arg(long, env = "CONTACTS_SEED_PATH", default_value = SEED_PATH)]
    pub seed: PathBuf,

    /// Address the HTTP server listens on
    #[arg(long, env = "CONTACTS_BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Emit logs as JSON lines
    #[arg(long, env = "CONTACTS_LOG_JSON")]
    pub log_json: bool,
}
