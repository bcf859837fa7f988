//! # stades-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST endpoint for stades under `/api/stades`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Attach the `X-{app}-alert` / `X-{app}-error` / `X-{app}-params`
//!   notification headers client apps rely on
//!
//! ## Dependency rule
//! Depends on `stades-app` (for port traits and services) and `stades-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod alert;
pub mod api;
pub mod error;
pub mod router;
pub mod state;
