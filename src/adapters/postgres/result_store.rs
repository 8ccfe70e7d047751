//! PostgreSQL implementation of ResultStore.
//!
//! Persists result documents as JSONB rows in the `results` collection.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
use crate::domain::numbers::{PersistedDocument, RESULTS_COLLECTION};
use crate::ports::ResultStore;

/// PostgreSQL implementation of ResultStore.
#[derive(Clone)]
pub struct PostgresResultStore {
    pool: PgPool,
}

impl PostgresResultStore {
    /// Creates a new PostgresResultStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert statement for the results collection. The table itself is created
/// by `migrations/0001_create_results.sql`.
fn insert_sql() -> String {
    format!(
        "INSERT INTO {} (document, created_at) VALUES ($1, $2) RETURNING id",
        RESULTS_COLLECTION
    )
}

#[async_trait]
impl ResultStore for PostgresResultStore {
    async fn insert(&self, document: &PersistedDocument) -> Result<DocumentId, DomainError> {
        let body = serde_json::to_value(document).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to encode result document: {}", e),
            )
        })?;

        let sql = insert_sql();
        let (id,): (Uuid,) = sqlx::query_as(&sql)
            .bind(body)
            .bind(document.created_at().as_datetime())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to insert result document: {}", e))
                    .with_detail("collection", RESULTS_COLLECTION)
            })?;

        Ok(DocumentId::from_uuid(id))
    }
}
