// src/bin/api_server.rs

use product_api::infra::telemetry;
use product_api::transport;
use product_api::{
    AppConfig, DatabaseService, InMemoryRepository, Product, Repository, StorageBackend,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    let config = AppConfig::from_env()?;

    // --- Repository Initialization ---
    let products: Arc<dyn Repository<Product>> = match config.storage_backend {
        StorageBackend::Postgres => {
            tracing::info!("initializing DatabaseService");
            let db_service = DatabaseService::new(&config).await?;
            db_service.ensure_table::<Product>().await?;
            Arc::new(db_service.repository::<Product>())
        }
        StorageBackend::Memory => {
            tracing::warn!("STORAGE_BACKEND=memory: products are lost on restart");
            Arc::new(InMemoryRepository::<Product>::new())
        }
    };
    let app_state = transport::http::AppState::new(products);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let mut app = transport::http::create_router(app_state);
    if config.is_development() {
        app = app.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        );
        tracing::info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);
    }
    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("shutdown signal received");
}
