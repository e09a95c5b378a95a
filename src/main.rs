// src/main.rs

use contact_book::infra::config;
use contact_book::transport;
use contact_book::ContactService;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Store Initialization ---
    let contacts_path = config::contacts_path();
    log::info!("Opening contact store at {}", contacts_path.display());
    let service = ContactService::open(&contacts_path)?;
    let count = service.list()?.len();
    log::info!("Contact store ready ({} contact(s))", count);

    // --- API Server Initialization ---
    let static_dir = config::static_dir();
    if !static_dir.is_dir() {
        log::warn!(
            "Static directory {} does not exist; only routes will be served",
            static_dir.display()
        );
    }
    let app_state = transport::http::AppState::new(service);
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state, &static_dir)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Contact book listening on http://{}", listener.local_addr()?);
    log::info!("Swagger UI available at /swagger-ui");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            log::info!("Shutdown signal received (Ctrl+C), exiting");
        }
    }

    Ok(())
}
