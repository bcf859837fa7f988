//! Notification headers for client applications.
//!
//! Handlers and error responses tag their [`Response`] with an [`Alert`]
//! extension; [`apply`] runs as router middleware and renders it into
//! `X-{app}-alert` / `X-{app}-error` / `X-{app}-params` headers using the
//! configured application name.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::Response;

use stades_domain::error::STADE_ENTITY_NAME;
use stades_domain::id::StadeId;

/// How alerts are rendered.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Prefix of the header names and of translation keys.
    pub application_name: String,
    /// Emit translation keys instead of English sentences.
    pub enable_translation: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            application_name: "stadesApp".to_string(),
            enable_translation: true,
        }
    }
}

/// Outcome a response should notify the client about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Created(StadeId),
    Updated(StadeId),
    Deleted(StadeId),
    Failure {
        error_key: &'static str,
        message: String,
    },
}

impl AlertConfig {
    /// Render `alert` as response headers.
    ///
    /// Values that are not valid header values are skipped.
    #[must_use]
    pub fn headers(&self, alert: &Alert) -> HeaderMap {
        let app = &self.application_name;
        let (kind, text, params) = match alert {
            Alert::Created(id) => {
                let sentence = format!("A new {STADE_ENTITY_NAME} is created with identifier {id}");
                ("alert", self.entity_message("created", sentence), id.to_string())
            }
            Alert::Updated(id) => {
                let sentence = format!("A {STADE_ENTITY_NAME} is updated with identifier {id}");
                ("alert", self.entity_message("updated", sentence), id.to_string())
            }
            Alert::Deleted(id) => {
                let sentence = format!("A {STADE_ENTITY_NAME} is deleted with identifier {id}");
                ("alert", self.entity_message("deleted", sentence), id.to_string())
            }
            Alert::Failure { error_key, message } => {
                tracing::warn!(entity = STADE_ENTITY_NAME, %message, "entity processing failed");
                let text = if self.enable_translation {
                    format!("error.{error_key}")
                } else {
                    message.clone()
                };
                ("error", text, STADE_ENTITY_NAME.to_string())
            }
        };

        let mut headers = HeaderMap::new();
        insert(&mut headers, &format!("X-{app}-{kind}"), &text);
        insert(&mut headers, &format!("X-{app}-params"), &params);
        headers
    }

    fn entity_message(&self, action: &str, sentence: String) -> String {
        if self.enable_translation {
            format!("{}.{STADE_ENTITY_NAME}.{action}", self.application_name)
        } else {
            sentence
        }
    }
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => tracing::warn!(header = name, "skipping alert header with invalid name or value"),
    }
}

/// Middleware turning an [`Alert`] response extension into headers.
pub async fn apply(State(config): State<Arc<AlertConfig>>, mut response: Response) -> Response {
    if let Some(alert) = response.extensions_mut().remove::<Alert>() {
        let headers = config.headers(&alert);
        response.headers_mut().extend(headers);
    }
    response
}
