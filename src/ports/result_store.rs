//! Result store port (write side).
//!
//! Defines the contract for writing computed result documents to the
//! durable store. The service never reads, updates or deletes them.

use crate::domain::foundation::{DocumentId, DomainError};
use crate::domain::numbers::PersistedDocument;
use async_trait::async_trait;

/// Write-once persistence for result documents.
///
/// Implementations make exactly one attempt per call and report every
/// connectivity, timeout or write failure through the returned error
/// rather than panicking.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Insert a new document and return the identifier the store assigned.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on any connection or write failure
    /// - `SerializationError` if the document cannot be encoded
    async fn insert(&self, document: &PersistedDocument) -> Result<DocumentId, DomainError>;
}
