//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Serialize;

use stades_domain::error::{STADE_ENTITY_NAME, StadesError};

use crate::alert::Alert;

/// Problem-details flavoured JSON body returned by API endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProblemBody {
    title: String,
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_key: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'static str>,
}

impl ProblemBody {
    fn http(status: StatusCode, title: String) -> Self {
        Self {
            title,
            status: status.as_u16(),
            message: format!("error.http.{}", status.as_u16()),
            entity_name: None,
            error_key: None,
            params: None,
        }
    }
}

/// Maps [`StadesError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(StadesError);

impl From<StadesError> for ApiError {
    fn from(err: StadesError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            StadesError::Validation(err) => {
                let status = StatusCode::BAD_REQUEST;
                let error_key = err.error_key();
                let alert = Alert::Failure {
                    error_key,
                    message: err.to_string(),
                };
                let body = ProblemBody {
                    title: err.to_string(),
                    status: status.as_u16(),
                    message: format!("error.{error_key}"),
                    entity_name: Some(STADE_ENTITY_NAME),
                    error_key: Some(error_key),
                    params: Some(STADE_ENTITY_NAME),
                };
                (status, Extension(alert), Json(body)).into_response()
            }
            StadesError::NotFound(err) => {
                let status = StatusCode::NOT_FOUND;
                (status, Json(ProblemBody::http(status, err.to_string()))).into_response()
            }
            StadesError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ProblemBody::http(status, "Internal Server Error".to_string());
                (status, Json(body)).into_response()
            }
        }
    }
}
