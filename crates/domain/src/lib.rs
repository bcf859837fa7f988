//! # stades-domain
//!
//! Pure domain model for the stades service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`StadeId`](id::StadeId) and error conventions
//! - Define the **Stade** entity and its partial-update (merge) rule
//! - Carry the identifier invariants as typed errors
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod stade;
