// CLI module for messages-api

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// messages-api - HTTP routing service for a messages resource
#[derive(Parser, Debug, Default)]
#[command(name = "messages-api", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.messages-api/config.toml)
    #[arg(short, long, env = "MESSAGES_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply flag overrides; flags win over every other config source.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
