//! `SQLite` implementation of [`StadeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stades_app::ports::StadeRepository;
use stades_domain::error::StadesError;
use stades_domain::id::StadeId;
use stades_domain::stade::Stade;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Stade`].
struct Wrapper(Stade);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Stade> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let stade: Option<String> = row.try_get("stade")?;
        let description: Option<String> = row.try_get("description")?;

        Ok(Self(Stade {
            id: Some(StadeId::new(id)),
            stade,
            description,
        }))
    }
}

const UPSERT: &str = "INSERT INTO stades (id, stade, description) VALUES (?, ?, ?) \
     ON CONFLICT(id) DO UPDATE SET stade = excluded.stade, description = excluded.description";
const EXISTS_BY_ID: &str = "SELECT EXISTS(SELECT 1 FROM stades WHERE id = ?)";
const SELECT_BY_ID: &str = "SELECT * FROM stades WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM stades ORDER BY rowid";
const DELETE_BY_ID: &str = "DELETE FROM stades WHERE id = ?";

/// `SQLite`-backed stade repository.
///
/// Records saved without an id receive a random UUID v4.
pub struct SqliteStadeRepository {
    pool: SqlitePool,
}

impl SqliteStadeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StadeRepository for SqliteStadeRepository {
    fn save(&self, mut stade: Stade) -> impl Future<Output = Result<Stade, StadesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = stade
                .id
                .get_or_insert_with(|| StadeId::new(uuid::Uuid::new_v4().to_string()))
                .to_string();

            sqlx::query(UPSERT)
                .bind(&id)
                .bind(&stade.stade)
                .bind(&stade.description)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            tracing::trace!(stade_id = %id, "stade saved");
            Ok(stade)
        }
    }

    fn exists_by_id(
        &self,
        id: &StadeId,
    ) -> impl Future<Output = Result<bool, StadesError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let exists: bool = sqlx::query_scalar(EXISTS_BY_ID)
                .bind(id)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(exists)
        }
    }

    fn find_by_id(
        &self,
        id: &StadeId,
    ) -> impl Future<Output = Result<Option<Stade>, StadesError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Stade>, StadesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete_by_id(&self, id: &StadeId) -> impl Future<Output = Result<(), StadesError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
