use clap::Parser;
use guildhall::{Registry, config::Config, db::Db, net::http};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "guildhall", about = "Players, items and inventories over HTTP")]
struct Args {
    /// TOML configuration file; the environment (and `.env`) is used when omitted
    #[arg(short, long, env = "GUILDHALL_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides the configured listen address
    #[arg(long)]
    http_addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    if let Some(addr) = args.http_addr {
        cfg.http_addr = addr;
    }
    let cfg = Arc::new(cfg);

    tracing::info!("connecting to the database");
    let db = Arc::new(Db::connect(&cfg).await?);
    tracing::info!("connected to the database");

    let registry = Arc::new(Registry::new(db, cfg.clone()));

    let http_addr: SocketAddr = cfg.http_addr.parse()?;
    tracing::info!(%http_addr, "guildhall server (http) listening");
    http::serve(http_addr, registry).await?;

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("installing error report handler: {e}"))?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info,guildhall=debug"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}
