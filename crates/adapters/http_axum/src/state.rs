//! Shared application state for axum handlers.

use std::sync::Arc;

use stades_app::ports::StadeRepository;
use stades_app::services::stade_service::StadeService;

use crate::alert::AlertConfig;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Stade CRUD service.
    pub stade_service: Arc<StadeService<R>>,
    /// Settings for the notification headers.
    pub alerts: Arc<AlertConfig>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            stade_service: Arc::clone(&self.stade_service),
            alerts: Arc::clone(&self.alerts),
        }
    }
}

impl<R> AppState<R>
where
    R: StadeRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(stade_service: StadeService<R>, alerts: AlertConfig) -> Self {
        Self {
            stade_service: Arc::new(stade_service),
            alerts: Arc::new(alerts),
        }
    }
}
