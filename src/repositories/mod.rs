use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::resource::{ListFilter, Record, RecordStore};

/// Data access for one record type.
///
/// Services only talk to this trait, so the in-memory implementation can be
/// swapped for a real backend without touching them.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// All records in store order.
    async fn list(&self) -> Result<Vec<R>, ServiceError>;

    /// Records passing `filter`, in store order.
    async fn list_filtered(&self, filter: &ListFilter<R::Category>) -> Result<Vec<R>, ServiceError>;

    async fn get_by_id(&self, id: &R::Id) -> Result<Option<R>, ServiceError>;

    /// Replaces the stored record with the same id. Fails with `NotFound`
    /// when no such record exists; records are never inserted implicitly.
    async fn update(&self, record: R) -> Result<R, ServiceError>;
}

/// Repository over a [`RecordStore`] held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R: Record> {
    kind: &'static str,
    store: Arc<RwLock<RecordStore<R>>>,
}

impl<R: Record> InMemoryRepository<R> {
    /// `kind` names the record type in `NotFound` messages.
    pub fn new(kind: &'static str, records: Vec<R>) -> Self {
        Self {
            kind,
            store: Arc::new(RwLock::new(RecordStore::new(records))),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    async fn list(&self) -> Result<Vec<R>, ServiceError> {
        Ok(self.store.read().await.as_slice().to_vec())
    }

    async fn list_filtered(&self, filter: &ListFilter<R::Category>) -> Result<Vec<R>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.filtered(filter).into_iter().cloned().collect())
    }

    async fn get_by_id(&self, id: &R::Id) -> Result<Option<R>, ServiceError> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn update(&self, record: R) -> Result<R, ServiceError> {
        let mut store = self.store.write().await;
        let id = record.id().clone();
        match store.replace(record.clone()) {
            Some(_) => {
                debug!(kind = self.kind, %id, "record updated");
                Ok(record)
            }
            None => Err(ServiceError::not_found(self.kind, id)),
        }
    }
}
