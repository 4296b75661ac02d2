use std::{fs::File, sync::Arc};

use catalog_axum::{router, start_server};
use catalog_sqlite::Db;
use catalogd::{
    AppConfig, Cli,
    impls::{CatalogApp, KeyRing},
};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig {
        server,
        database,
        auth,
    } = AppConfig::load(&cli)?;

    let keys = KeyRing::new(&auth, &cli.api_keys);
    if keys.is_empty() {
        tracing::warn!("No API keys configured; every product request will be refused");
    }

    let db = Db::open(&database).await?;
    let app = CatalogApp {
        db,
        keys: Arc::new(keys),
    };

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, schema) = router(app, server);
        serde_json::to_writer_pretty(File::create(path)?, &schema)?;
        return Ok(());
    }

    start_server(server, app).await?;

    Ok(())
}
