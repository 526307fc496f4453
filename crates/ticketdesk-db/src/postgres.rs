//! PostgreSQL subject store.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use ticketdesk_config::DatabaseConfig;
use ticketdesk_models::{Role, SubjectId, SubjectRecord};

use crate::{StoreError, SubjectStore};

#[derive(Clone, Debug)]
pub struct PgSubjectStore {
    pool: PgPool,
}

impl PgSubjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool. Should be called once at startup; the store is
    /// cheap to clone afterwards.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct SubjectRow {
    id: String,
    email: String,
    password_hash: String,
    role: String,
}

impl TryFrom<SubjectRow> for SubjectRecord {
    type Error = StoreError;

    fn try_from(row: SubjectRow) -> Result<Self, Self::Error> {
        let id = SubjectId::new(row.id).map_err(|e| StoreError::Decode(e.to_string()))?;
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StoreError::Decode(format!("subject {id}: {e}")))?;

        Ok(SubjectRecord {
            id,
            email: row.email,
            password_hash: row.password_hash,
            role,
        })
    }
}

#[async_trait]
impl SubjectStore for PgSubjectStore {
    #[instrument(skip(self), fields(db.operation = "find_subject_by_id"))]
    async fn find_subject_by_id(&self, id: &SubjectId) -> Result<Option<SubjectRecord>, StoreError> {
        sqlx::query_as::<_, SubjectRow>(
            "SELECT id, email, password_hash, role FROM users WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .map(SubjectRecord::try_from)
        .transpose()
    }

    #[instrument(skip(self, email), fields(db.operation = "find_subject_by_email"))]
    async fn find_subject_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubjectRecord>, StoreError> {
        sqlx::query_as::<_, SubjectRow>(
            "SELECT id, email, password_hash, role FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .map(SubjectRecord::try_from)
        .transpose()
    }
}
