//! Axum router assembly.

use axum::Router;
use axum::middleware::map_response_with_state;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use stades_app::ports::StadeRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`, renders alert headers on the way out and
/// includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: StadeRepository + Send + Sync + 'static,
{
    let alerts = state.alerts.clone();
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes::<R>())
        .layer(map_response_with_state(alerts, crate::alert::apply))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
