//! Stade service — use-cases behind the `/api/stades` endpoint.

use stades_domain::error::{NotFoundError, StadesError, ValidationError};
use stades_domain::id::StadeId;
use stades_domain::stade::Stade;

use crate::ports::StadeRepository;

/// Application service for stade CRUD operations.
pub struct StadeService<R> {
    repo: R,
}

impl<R: StadeRepository> StadeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new stade and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdExists`] if the stade already has an id,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, stade))]
    pub async fn create_stade(&self, stade: Stade) -> Result<Stade, StadesError> {
        tracing::debug!(?stade, "request to save stade");
        stade.validate_new()?;
        self.repo.save(stade).await
    }

    /// Replace the stade stored under `id` with `stade`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdNull`] or [`ValidationError::IdInvalid`]
    /// if the body id is missing or differs from `id`,
    /// [`ValidationError::IdNotFound`] if nothing is stored under `id`,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, stade))]
    pub async fn update_stade(&self, id: &StadeId, stade: Stade) -> Result<Stade, StadesError> {
        tracing::debug!(?stade, "request to update stade");
        self.ensure_target(id, &stade).await?;
        self.repo.save(stade).await
    }

    /// Merge the non-null fields of `patch` into the stade stored under `id`.
    ///
    /// # Errors
    ///
    /// Same identifier errors as [`update_stade`](Self::update_stade), plus
    /// [`StadesError::NotFound`] if the record vanished between the existence
    /// check and the lookup.
    #[tracing::instrument(skip(self, patch))]
    pub async fn partial_update_stade(
        &self,
        id: &StadeId,
        patch: Stade,
    ) -> Result<Stade, StadesError> {
        tracing::debug!(?patch, "request to partially update stade");
        self.ensure_target(id, &patch).await?;

        let mut existing = self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        existing.merge(patch);
        self.repo.save(existing).await
    }

    /// List all stades.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_stades(&self) -> Result<Vec<Stade>, StadesError> {
        tracing::debug!("request to get all stades");
        self.repo.find_all().await
    }

    /// Look up a stade by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StadesError::NotFound`] when no stade with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_stade(&self, id: &StadeId) -> Result<Stade, StadesError> {
        tracing::debug!("request to get stade");
        self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Delete a stade by id. No existence check is made first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_stade(&self, id: &StadeId) -> Result<(), StadesError> {
        tracing::debug!("request to delete stade");
        self.repo.delete_by_id(id).await
    }

    async fn ensure_target(&self, id: &StadeId, stade: &Stade) -> Result<(), StadesError> {
        stade.validate_target(id)?;
        if !self.repo.exists_by_id(id).await? {
            return Err(ValidationError::IdNotFound.into());
        }
        Ok(())
    }
}

fn not_found(id: &StadeId) -> StadesError {
    NotFoundError {
        entity: "Stade",
        id: id.to_string(),
    }
    .into()
}
