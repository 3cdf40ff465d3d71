//! Router assembly and the listener loop.

use crate::{AppState, SiteConfig, api, functions, pages};
use axum::Router;
use tessera_error::{HttpError, TesseraResult};
use tracing::info;

/// Every route: pages, JSON API, and function endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(api::router())
        .merge(functions::router())
        .fallback(pages::fallback)
        .with_state(state)
}

/// Load state from `config`, bind, and serve until the process exits.
pub async fn serve(config: SiteConfig) -> TesseraResult<()> {
    let bind = config.server().bind().clone();
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", bind, e)))?;
    info!(address = %bind, "Tessera site listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;
    Ok(())
}
