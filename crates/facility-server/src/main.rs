use anyhow::Result;
use application::{AdminGuard, FacilityStore};
use clap::Parser;
use infrastructure::cache::LocalCache;
use infrastructure::{AppConfig, database};
use migration::{Migrator, MigratorTrait};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use facility_server::{api, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml / {RUN_MODE}.toml
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// API port (overrides server.port)
    #[arg(long)]
    port: Option<u16>,

    /// Ignore any configured remote database and use the local cache only
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,facility_server=debug,application=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();
    let args = Args::parse();
    info!("Facility server starting...");

    let config = AppConfig::load(&args.config_dir)?;

    // 1. Local cache (always available)
    let cache = LocalCache::new(&config.cache.url).await?;
    info!(url = %config.cache.url, "Local cache initialized");

    // 2. Remote database (optional)
    let remote_url = if args.offline {
        None
    } else {
        config.remote_url()
    };
    let store = match remote_url {
        Some(url) => {
            let max_connections = config
                .remote
                .as_ref()
                .map(|r| r.max_connections)
                .unwrap_or(5);
            let run_migrations = config.remote.as_ref().is_some_and(|r| r.run_migrations);

            match database::connect(url, max_connections).await {
                Ok(db) => {
                    info!("Connected to remote database");
                    if run_migrations {
                        info!("Running database migrations...");
                        Migrator::up(&db, None).await?;
                        info!("Migrations applied successfully");
                    }
                    FacilityStore::connected(db, cache)
                }
                Err(e) => {
                    warn!(error = %e, "Remote database unreachable, running offline");
                    FacilityStore::offline(cache)
                }
            }
        }
        None => {
            info!("No remote database configured, running offline");
            FacilityStore::offline(cache)
        }
    };

    // 3. Start API server
    let state = setup_app_state(store, AdminGuard::new(config.admin.password.clone()));
    let app = api::create_router(state);

    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
