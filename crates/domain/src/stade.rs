//! Stade — the single entity managed by the service.

use serde::{Deserialize, Serialize};

use crate::error::{StadesError, ValidationError};
use crate::id::StadeId;

/// A stade record.
///
/// `id` is absent until storage assigns one. Every other field is optional
/// and missing JSON fields deserialize as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stade {
    pub id: Option<StadeId>,
    pub stade: Option<String>,
    pub description: Option<String>,
}

impl Stade {
    /// Create a builder for constructing a [`Stade`].
    #[must_use]
    pub fn builder() -> StadeBuilder {
        StadeBuilder::default()
    }

    /// Check that this record can be created.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdExists`] when an id is already set.
    pub fn validate_new(&self) -> Result<(), StadesError> {
        if self.id.is_some() {
            return Err(ValidationError::IdExists.into());
        }
        Ok(())
    }

    /// Check that this record may be written under `path_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdNull`] when no id is set, or
    /// [`ValidationError::IdInvalid`] when it differs from `path_id`.
    pub fn validate_target(&self, path_id: &StadeId) -> Result<(), StadesError> {
        match &self.id {
            None => Err(ValidationError::IdNull.into()),
            Some(id) if id != path_id => Err(ValidationError::IdInvalid.into()),
            Some(_) => Ok(()),
        }
    }

    /// Overwrite the fields for which `patch` carries a value.
    ///
    /// The id is left alone.
    pub fn merge(&mut self, patch: Stade) {
        if let Some(stade) = patch.stade {
            self.stade = Some(stade);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// Step-by-step builder for [`Stade`].
#[derive(Debug, Default)]
pub struct StadeBuilder {
    id: Option<StadeId>,
    stade: Option<String>,
    description: Option<String>,
}

impl StadeBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<StadeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn stade(mut self, stade: impl Into<String>) -> Self {
        self.stade = Some(stade.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder and return a [`Stade`].
    #[must_use]
    pub fn build(self) -> Stade {
        Stade {
            id: self.id,
            stade: self.stade,
            description: self.description,
        }
    }
}
