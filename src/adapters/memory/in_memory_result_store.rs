//! In-Memory Result Store Adapter
//!
//! Keeps result documents in process memory.
//! Useful for testing and local development without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DocumentId, DomainError};
use crate::domain::numbers::PersistedDocument;
use crate::ports::ResultStore;

/// In-memory storage for result documents
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultStore {
    documents: Arc<RwLock<Vec<(DocumentId, PersistedDocument)>>>,
    failure: Option<String>,
}

impl InMemoryResultStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every insert fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            documents: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// Get the number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Snapshot of stored documents in insertion order
    pub async fn documents(&self) -> Vec<(DocumentId, PersistedDocument)> {
        self.documents.read().await.clone()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn insert(&self, document: &PersistedDocument) -> Result<DocumentId, DomainError> {
        if let Some(message) = &self.failure {
            return Err(DomainError::database(message.clone()));
        }

        let id = DocumentId::new();
        self.documents.write().await.push((id, document.clone()));
        Ok(id)
    }
}
