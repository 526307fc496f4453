//! # Ticketdesk DB
//!
//! The subject store: the only storage the auth gates read from.
//!
//! - [`SubjectStore`]: lookup interface used by login and the role gate
//! - [`memory::InMemorySubjectStore`]: map-backed store for tests and local runs
//! - [`postgres::PgSubjectStore`]: PostgreSQL store backed by SQLx
//!
//! Lookups never retry and apply no timeout of their own. A failed lookup
//! surfaces immediately as a [`StoreError`].
//!
//! # Example
//!
//! ```ignore
//! use ticketdesk_db::{PgSubjectStore, SubjectStore};
//!
//! let store = PgSubjectStore::connect(&DatabaseConfig::from_env()?).await?;
//! let subject = store.find_subject_by_id(&subject_id).await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use ticketdesk_models::{SubjectId, SubjectRecord};

pub mod memory;
pub mod postgres;

pub use memory::InMemorySubjectStore;
pub use postgres::PgSubjectStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("corrupt subject record: {0}")]
    Decode(String),

    #[error("subject store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to subject records.
///
/// `Ok(None)` means the subject does not exist; `Err` means the lookup itself
/// failed. Callers must keep the two apart.
#[async_trait]
pub trait SubjectStore: Send + Sync {
    async fn find_subject_by_id(&self, id: &SubjectId) -> Result<Option<SubjectRecord>, StoreError>;

    /// Email comparison is case-insensitive.
    async fn find_subject_by_email(&self, email: &str)
    -> Result<Option<SubjectRecord>, StoreError>;
}
