//! Luxe Storefront - storefront backend

use std::sync::Arc;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luxe_storefront::{
    api::{router, AppState},
    config::Config,
    domain::aggregates::Catalog,
    likes::LikeStore,
    publisher::EventPublisher,
    session::MemorySignups,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();

    let config = Config::load()?;
    let catalog = Catalog::validated(Catalog::builtin().all())?;
    info!(products = catalog.len(), "catalog loaded");

    let likes = match &config.database_url {
        Some(url) => {
            let db = PgPoolOptions::new().max_connections(config.database_max_connections).connect(url).await?;
            sqlx::migrate!("./migrations").run(&db).await?;
            LikeStore::Postgres(db)
        }
        None => {
            warn!("DATABASE_URL not set, blog likes are kept in memory");
            LikeStore::memory()
        }
    };

    let nats = match &config.nats_url {
        Some(url) => match async_nats::connect(url.as_str()).await {
            Ok(client) => Some(client),
            Err(e) => { warn!(error = %e, "NATS unavailable, events will not be published"); None }
        },
        None => None,
    };

    let events = EventPublisher::new(nats);
    info!(enabled = events.is_enabled(), "event publishing");
    let signups = Arc::new(MemorySignups::with_capacity(config.session_capacity));
    let state = AppState::new(catalog, likes, signups, events);
    let app = router(state);

    let addr = config.bind_addr();
    info!("🚀 Luxe Storefront listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(&addr).await?, app).await?;
    Ok(())
}
