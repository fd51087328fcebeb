use std::sync::Arc;

use anyhow::Context;
use storage::{
    Database,
    repository::{InMemoryShipRepository, PgShipRepository, ShipStore},
    services::ShipCatalog,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::ships::handlers::list_ships,
        features::ships::handlers::count_ships,
        features::ships::handlers::get_ship,
        features::ships::handlers::create_ship,
        features::ships::handlers::update_ship,
        features::ships::handlers::delete_ship,
    ),
    components(
        schemas(
            storage::dto::ship::CreateShipRequest,
            storage::dto::ship::UpdateShipRequest,
            storage::dto::ship::ShipResponse,
            storage::dto::filter::ShipOrder,
            storage::models::ShipType,
        )
    ),
    tags(
        (name = "ships", description = "Ship catalog endpoints"),
    )
)]
struct ApiDoc;

async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn ShipStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, ships are kept in memory only");
        return Ok(Arc::new(InMemoryShipRepository::new()));
    };

    tracing::info!(
        "Connecting to database at: {}",
        database_url.split('@').next_back().unwrap_or("unknown")
    );
    let db = Database::with_max_connections(database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgShipRepository::new(db.pool().clone())))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Cosmoport API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let catalog = ShipCatalog::new(open_store(&config).await?);

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::router(catalog)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app).await?;

    Ok(())
}
