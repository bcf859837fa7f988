//! JSON REST handlers for stades.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use stades_app::ports::StadeRepository;
use stades_domain::id::StadeId;
use stades_domain::stade::Stade;

use crate::alert::Alert;
use crate::error::ApiError;
use crate::state::AppState;

/// Base path the endpoint is mounted under, used for `Location` headers.
pub const BASE_PATH: &str = "/api/stades";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Stade>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Stade>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Stade),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(stade) => {
                let mut headers = HeaderMap::new();
                if let Some(id) = &stade.id {
                    match HeaderValue::try_from(format!("{BASE_PATH}/{id}")) {
                        Ok(location) => {
                            headers.insert(LOCATION, location);
                        }
                        Err(_) => {
                            tracing::warn!(stade_id = %id, "id cannot be used in a Location header");
                        }
                    }
                }
                let alert = stade.id.clone().map(|id| Extension(Alert::Created(id)));
                (StatusCode::CREATED, headers, alert, Json(stade)).into_response()
            }
        }
    }
}

/// Possible responses from the update and partial update endpoints.
pub enum UpdateResponse {
    Ok(Stade),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(stade) => {
                let alert = stade.id.clone().map(|id| Extension(Alert::Updated(id)));
                (alert, Json(stade)).into_response()
            }
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent(StadeId),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent(id) => {
                (StatusCode::NO_CONTENT, Extension(Alert::Deleted(id))).into_response()
            }
        }
    }
}

/// `GET /api/stades`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: StadeRepository + Send + Sync + 'static,
{
    let stades = state.stade_service.list_stades().await?;
    Ok(ListResponse::Ok(Json(stades)))
}

/// `GET /api/stades/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: StadeRepository + Send + Sync + 'static,
{
    let stade = state.stade_service.get_stade(&StadeId::from(id)).await?;
    Ok(GetResponse::Ok(Json(stade)))
}

/// `POST /api/stades`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(stade): Json<Stade>,
) -> Result<CreateResponse, ApiError>
where
    R: StadeRepository + Send + Sync + 'static,
{
    let created = state.stade_service.create_stade(stade).await?;
    Ok(CreateResponse::Created(created))
}

/// `PUT /api/stades/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(stade): Json<Stade>,
) -> Result<UpdateResponse, ApiError>
where
    R: StadeRepository + Send + Sync + 'static,
{
    let updated = state
        .stade_service
        .update_stade(&StadeId::from(id), stade)
        .await?;
    Ok(UpdateResponse::Ok(updated))
}

/// `PATCH /api/stades/:id`
///
/// Accepts `application/json` as well as `application/merge-patch+json`.
pub async fn partial_update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(patch): Json<Stade>,
) -> Result<UpdateResponse, ApiError>
where
    R: StadeRepository + Send + Sync + 'static,
{
    let updated = state
        .stade_service
        .partial_update_stade(&StadeId::from(id), patch)
        .await?;
    Ok(UpdateResponse::Ok(updated))
}

/// `DELETE /api/stades/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: StadeRepository + Send + Sync + 'static,
{
    let id = StadeId::from(id);
    state.stade_service.delete_stade(&id).await?;
    Ok(DeleteResponse::NoContent(id))
}
