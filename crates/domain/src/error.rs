//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`StadesError`]
//! via `#[from]` (or a manual `From` impl for boxed storage errors).

/// Name under which the Stade entity is reported to clients.
pub const STADE_ENTITY_NAME: &str = "stade";

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum StadesError {
    /// An identifier constraint was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist.
    #[error("entity not found")]
    NotFound(#[from] NotFoundError),

    /// The storage collaborator failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Identifier constraints on create, update and partial update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A record presented for creation already carries an id.
    #[error("A new stade cannot already have an ID")]
    IdExists,

    /// A record presented for update carries no id.
    #[error("Invalid id")]
    IdNull,

    /// The body id differs from the path id.
    #[error("Invalid ID")]
    IdInvalid,

    /// The id to update is unknown to storage.
    #[error("Entity not found")]
    IdNotFound,
}

impl ValidationError {
    /// Stable key clients use to look up a translated message.
    #[must_use]
    pub fn error_key(&self) -> &'static str {
        match self {
            Self::IdExists => "idexists",
            Self::IdNull => "idnull",
            Self::IdInvalid => "idinvalid",
            Self::IdNotFound => "idnotfound",
        }
    }
}

/// Lookup of a single record by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_error_keys() {
        assert_eq!(ValidationError::IdExists.error_key(), "idexists");
        assert_eq!(ValidationError::IdNull.error_key(), "idnull");
        assert_eq!(ValidationError::IdInvalid.error_key(), "idinvalid");
        assert_eq!(ValidationError::IdNotFound.error_key(), "idnotfound");
    }

    #[test]
    fn should_convert_validation_error_into_stades_error() {
        let err: StadesError = ValidationError::IdNull.into();
        assert!(matches!(err, StadesError::Validation(ValidationError::IdNull)));
    }

    #[test]
    fn should_format_not_found_error() {
        let err = NotFoundError {
            entity: "Stade",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Stade 42 not found");
    }
}
