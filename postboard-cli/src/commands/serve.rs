//! HTTP server command
//!
//! Resolves configuration (defaults, then TOML file, then environment and
//! flags) and runs the post API until shutdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (default: 0.0.0.0)
    #[arg(long, env = "POSTBOARD_HOST")]
    pub host: Option<String>,

    /// Port to bind to (default: 5002)
    #[arg(long, short = 'p', env = "POSTBOARD_PORT")]
    pub port: Option<u16>,

    /// Config file (default: ~/.postboard/config.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Allowed CORS origin; repeat for several (default: any origin)
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,
}

impl ServeArgs {
    /// Merge file config with environment and flag values.
    pub fn resolve_config(self) -> Result<ServerConfig> {
        let base = ServerConfig::resolve(self.config.as_deref())
            .context("Failed to load server configuration")?;
        Ok(base.with_overrides(self.host, self.port, self.cors_origins))
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.resolve_config()?;

    tracing::info!("Starting postboard server on {}", config.socket_addr());

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
