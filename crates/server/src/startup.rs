use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve on Ctrl+C so in-flight requests can finish.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Router with the shared state and default layers applied.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: connect and migrate the database, then serve HTTP until Ctrl+C.
/// The connection pool lives exactly as long as this call.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let app = build_app(ServerState::new(db.clone()));

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "fitness center server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("database connections closed");
    Ok(())
}
