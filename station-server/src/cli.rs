//! Command-line interface.
//!
//! ```text
//! # Serve the lookup API from a local catalog
//! station-server --catalog stations.jsonld serve --bind 0.0.0.0:3000
//!
//! # Search once and print the JSON-LD result
//! station-server --catalog https://irail.be/stations/NMBS search "Bru." --limit 3
//!
//! # Resolve an old-style id
//! station-server lookup BE.NMBS.008892007
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use crate::catalog::{CatalogSource, CatalogStore};
use crate::config::{CatalogLocation, ServerConfig};
use crate::lookup::DEFAULT_LIMIT;
use crate::web::{AppState, create_router};

#[derive(Debug, Parser)]
#[command(name = "station-server")]
#[command(version)]
#[command(about = "Search and resolve railway stations from a JSON-LD catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file path or http(s) URL
    #[arg(long, global = true, env = "STATIONS_CATALOG", default_value = "stations.jsonld")]
    pub catalog: String,

    /// Keep downloaded catalogs in this file
    #[arg(long, global = true, env = "STATIONS_CACHE")]
    pub cache: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Search stations by name
    Search(SearchArgs),

    /// Resolve a station by id
    Lookup(LookupArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "STATIONS_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Seconds between catalog reloads (0 disables reloading)
    #[arg(long, default_value_t = 24 * 60 * 60)]
    pub reload_secs: u64,

    /// Largest result count a client may request
    #[arg(long, default_value_t = 50)]
    pub max_limit: usize,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text query; empty prints the whole catalog
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Country code (accepted, not yet used for filtering)
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Station URI, BE.NMBS. id, or bare NMBS id
    pub id: String,
}

impl Cli {
    /// Configuration shared by every command.
    pub fn config(&self) -> ServerConfig {
        let mut config = ServerConfig::new(CatalogLocation::parse(&self.catalog));
        if let Some(cache) = &self.cache {
            config = config.with_cache(cache);
        }
        if let Commands::Serve(args) = &self.command {
            config = config
                .with_bind(args.bind)
                .with_reload_interval(Some(Duration::from_secs(args.reload_secs)));
            config.max_limit = args.max_limit;
        }
        config
    }
}

/// Run the parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    match cli.command {
        Commands::Serve(_) => serve(config).await,
        Commands::Search(args) => search(config, args).await,
        Commands::Lookup(args) => lookup(config, args).await,
    }
}

/// Load the catalog and serve HTTP until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let source = config.source().context("failed to set up catalog source")?;
    let store = CatalogStore::load(source)
        .await
        .context("failed to load station catalog")?;
    info!(stations = store.len().await, "catalog ready");

    if let Some(interval) = config.reload_interval {
        spawn_reload(store.clone(), interval);
    }

    let bind = config.bind;
    let app = create_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    info!("station lookup listening on http://{bind}");
    info!("  GET /health");
    info!("  GET /stations?q=&country=&limit=");
    info!("  GET /stations/lookup?id=");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Reload the catalog every `interval`, keeping the old one on failure.
fn spawn_reload<S: CatalogSource + 'static>(store: CatalogStore<S>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await; // First tick is immediate, skip it
        loop {
            ticker.tick().await;
            match store.refresh().await {
                Ok(count) => info!(stations = count, "reloaded catalog"),
                Err(e) => warn!(error = %e, "failed to reload catalog, keeping previous"),
            }
        }
    });
}

async fn search(config: ServerConfig, args: SearchArgs) -> anyhow::Result<()> {
    let catalog = config
        .source()?
        .load()
        .await
        .context("failed to load station catalog")?;

    let stations = catalog.search(&args.query, args.country.as_deref(), args.limit);
    let envelope = catalog.envelope(&args.query, stations);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

async fn lookup(config: ServerConfig, args: LookupArgs) -> anyhow::Result<()> {
    let catalog = config
        .source()?
        .load()
        .await
        .context("failed to load station catalog")?;

    let Some(station) = catalog.resolve_by_id(&args.id) else {
        bail!("no station with id {}", args.id);
    };
    println!("{}", serde_json::to_string_pretty(station)?);
    Ok(())
}
