use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;
pub mod page;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    router(Arc::new(state))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/articles", post(handlers::generate_article))
        .route("/api/render", post(handlers::render_article))
        .layer(cors)
        .with_state(state)
}

/// Serve the app until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> ag_core::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use ag_core::{Error, Result};
}
