//! Storage port — keyed persistence for stades.

use std::future::Future;

use stades_domain::error::StadesError;
use stades_domain::id::StadeId;
use stades_domain::stade::Stade;

/// Repository for persisting and querying [`Stade`]s.
///
/// Implementations own id generation: [`save`](Self::save) assigns a fresh
/// id to records that have none.
pub trait StadeRepository {
    /// Insert or replace a stade, returning the stored record with its id.
    fn save(&self, stade: Stade) -> impl Future<Output = Result<Stade, StadesError>> + Send;

    /// Whether a stade with `id` is stored.
    fn exists_by_id(
        &self,
        id: &StadeId,
    ) -> impl Future<Output = Result<bool, StadesError>> + Send;

    /// Get a stade by its unique identifier.
    fn find_by_id(
        &self,
        id: &StadeId,
    ) -> impl Future<Output = Result<Option<Stade>, StadesError>> + Send;

    /// Get all stades, in storage order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Stade>, StadesError>> + Send;

    /// Delete a stade by its unique identifier.
    ///
    /// Deleting an id that is not stored is not an error.
    fn delete_by_id(&self, id: &StadeId) -> impl Future<Output = Result<(), StadesError>> + Send;
}
