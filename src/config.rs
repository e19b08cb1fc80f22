//! Server Configuration
//!
//! Command-line flags with environment fallbacks. Search defaults are not
//! configurable here; they live in `SearchConfig`.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "record_search", about = "Read-only JSON record server with a search endpoint")]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "RECORD_SEARCH_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Database file (a JSON object of record arrays).
    #[arg(long, env = "RECORD_SEARCH_DB", default_value = "db.json")]
    pub db: PathBuf,

    /// Maximum log level (error, warn, info, debug, trace).
    #[arg(long, env = "RECORD_SEARCH_LOG", default_value = "info")]
    pub log_level: tracing::Level,
}
