use anyhow::Context;
use audit_trail_service::{
    audit_log::build_audit_log_router,
    bootstrap,
    config::app_config::AppConfig,
    request_log::{
        build_request_instrumentation_state, build_request_log_router,
        interfaces::rest::middleware::request_instrumentation_middleware::instrument,
    },
    shared::interfaces::rest::openapi::api_doc::ApiDoc,
};
use axum::Router;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let pool = bootstrap::ensure_ready(&config)
        .await
        .context("database bootstrap failed")?;

    let app = Router::new()
        .merge(build_audit_log_router(pool.clone(), config.debug))
        .merge(build_request_log_router(pool.clone(), config.debug))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let app = instrument(app, build_request_instrumentation_state(pool))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, debug = config.debug, "listening");
    tracing::info!("swagger ui available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
