use std::{io, path::PathBuf, sync::Arc};

use anyhow::Result;
use catalog_core::{CatalogApi, CatalogManager, HttpCatalogApi, NotificationCenter, OfflineCatalogApi};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod repl;

use config::load_settings;
use repl::Repl;

#[derive(Parser, Debug)]
#[command(about = "Browse and edit a remote product catalog")]
struct Args {
    /// Config file; defaults to ./catalog.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base: Option<String>,
    /// Never contact the catalog service; start from the sample products.
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(api_base) = args.api_base {
        settings.api_base = api_base.trim_end_matches('/').to_string();
    }
    settings.offline |= args.offline;

    let api: Arc<dyn CatalogApi> = if settings.offline {
        Arc::new(OfflineCatalogApi)
    } else {
        Arc::new(HttpCatalogApi::new(settings.api_base.clone()))
    };
    info!(api_base = %settings.api_base, offline = settings.offline, "starting catalog manager");

    let manager = CatalogManager::new(api, NotificationCenter::new(settings.notification_ttl()));
    let stdin = io::stdin();
    let mut repl = Repl::new(manager, stdin.lock(), io::stdout());
    repl.run().await
}
