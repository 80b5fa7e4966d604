use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Args;

use idolforge_collab::Forge;
use idolforge_core::ForgeConfig;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (default: $PORT or 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: std::net::IpAddr,
}

pub fn run(args: &ServeArgs) -> Result<()> {
    let config = ForgeConfig::from_env().context("Invalid configuration")?;
    let addr = SocketAddr::new(args.host, args.port.unwrap_or(config.port));

    eprintln!("IdolForge API running on http://{addr}");

    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    rt.block_on(async {
        idolforge_server::serve(Forge::new(config), addr)
            .await
            .with_context(|| format!("Server on {addr} failed"))
    })
}
