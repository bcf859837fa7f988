//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod stades;

use axum::Router;
use axum::routing::get;

use stades_app::ports::StadeRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: StadeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/stades", get(stades::list::<R>).post(stades::create::<R>))
        .route(
            "/stades/{id}",
            get(stades::get::<R>)
                .put(stades::update::<R>)
                .patch(stades::partial_update::<R>)
                .delete(stades::delete::<R>),
        )
}
