//! Worker Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{RmPaidUpdate, Worker, WorkerCreate, WorkerUpdate};

const TABLE: &str = "worker";

/// Strip the table prefix so callers may pass either "worker:key" or "key".
fn record_key(id: &str) -> &str {
    id.strip_prefix("worker:").unwrap_or(id)
}

#[derive(Clone)]
pub struct WorkerRepository {
    base: BaseRepository,
}

impl WorkerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All worker records, in store order.
    pub async fn find_all(&self) -> RepoResult<Vec<Worker>> {
        let workers: Vec<Worker> = self.base.db().select(TABLE).await?;
        Ok(workers)
    }

    /// Find worker by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Worker>> {
        let worker: Option<Worker> = self.base.db().select((TABLE, record_key(id))).await?;
        Ok(worker)
    }

    /// Create a worker; the store assigns the record id.
    pub async fn create(&self, data: WorkerCreate) -> RepoResult<Worker> {
        let created: Option<Worker> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create worker".to_string()))
    }

    /// Create a batch of workers with a single insert statement.
    /// All-or-nothing: the statement either persists every record or none.
    pub async fn create_many(&self, batch: Vec<WorkerCreate>) -> RepoResult<Vec<Worker>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        let created: Vec<Worker> = self.base.db().insert(TABLE).content(batch).await?;
        Ok(created)
    }

    /// Merge the provided fields into an existing record and return the
    /// resulting state.
    pub async fn update(&self, id: &str, data: WorkerUpdate) -> RepoResult<Worker> {
        let updated: Option<Worker> = self
            .base
            .db()
            .update((TABLE, record_key(id)))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound("Worker not found".to_string()))
    }

    /// Update only the paid amount, leaving every other field untouched.
    pub async fn update_rm_paid(&self, id: &str, data: RmPaidUpdate) -> RepoResult<Worker> {
        let updated: Option<Worker> = self
            .base
            .db()
            .update((TABLE, record_key(id)))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound("Worker not found".to_string()))
    }

    /// Hard delete a worker, returning the deleted snapshot if it existed.
    pub async fn delete(&self, id: &str) -> RepoResult<Option<Worker>> {
        let deleted: Option<Worker> = self.base.db().delete((TABLE, record_key(id))).await?;
        Ok(deleted)
    }

    /// Unconditionally delete every worker record, returning the count.
    pub async fn delete_all(&self) -> RepoResult<usize> {
        let deleted: Vec<Worker> = self.base.db().delete(TABLE).await?;
        Ok(deleted.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn repo() -> WorkerRepository {
        let service = DbService::memory().await.expect("in-memory store");
        WorkerRepository::new(service.db)
    }

    fn named(name: &str) -> WorkerCreate {
        WorkerCreate {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_find_roundtrip() {
        let repo = repo().await;

        let created = repo.create(named("Ana")).await.unwrap();
        let id = created.id.as_ref().expect("id assigned").to_string();

        let found = repo.find_by_id(&id).await.unwrap().expect("record exists");
        assert_eq!(found.name.as_deref(), Some("Ana"));

        // Bare key works as well as the full pointer
        let key = id.strip_prefix("worker:").unwrap();
        assert!(repo.find_by_id(key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_key() {
        let repo = repo().await;
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn merge_update_touches_only_provided_fields() {
        let repo = repo().await;

        let created = repo
            .create(WorkerCreate {
                name: Some("Ana".to_string()),
                phone_number: Some("0123456789".to_string()),
                rm_paid: Some(100.0),
                ..Default::default()
            })
            .await
            .unwrap();
        let id = created.id.unwrap().to_string();

        let updated = repo
            .update(
                &id,
                WorkerUpdate {
                    status: Some("inactive".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status.as_deref(), Some("inactive"));
        assert_eq!(updated.name.as_deref(), Some("Ana"));
        assert_eq!(updated.phone_number.as_deref(), Some("0123456789"));
        assert_eq!(updated.rm_paid, Some(100.0));
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let repo = repo().await;
        let err = repo
            .update("missing", WorkerUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_rm_paid_keeps_other_fields() {
        let repo = repo().await;

        let created = repo
            .create(WorkerCreate {
                name: Some("Ana".to_string()),
                rm_paid: Some(100.0),
                ..Default::default()
            })
            .await
            .unwrap();
        let id = created.id.unwrap().to_string();

        let updated = repo
            .update_rm_paid(&id, RmPaidUpdate { rm_paid: 150.0 })
            .await
            .unwrap();
        assert_eq!(updated.rm_paid, Some(150.0));
        assert_eq!(updated.name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn delete_returns_snapshot_then_record_is_gone() {
        let repo = repo().await;

        let created = repo.create(named("Ana")).await.unwrap();
        let id = created.id.unwrap().to_string();

        let deleted = repo.delete(&id).await.unwrap().expect("snapshot returned");
        assert_eq!(deleted.name.as_deref(), Some("Ana"));

        assert!(repo.find_by_id(&id).await.unwrap().is_none());
        assert!(repo.delete(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_many_assigns_distinct_ids() {
        let repo = repo().await;

        let created = repo
            .create_many(vec![named("Ana"), named("Binh"), named("Chandra")])
            .await
            .unwrap();
        assert_eq!(created.len(), 3);

        let mut ids: Vec<String> = created
            .iter()
            .map(|w| w.id.as_ref().unwrap().to_string())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn create_many_with_empty_batch_is_a_no_op() {
        let repo = repo().await;
        assert!(repo.create_many(Vec::new()).await.unwrap().is_empty());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_all_clears_the_table() {
        let repo = repo().await;

        repo.create_many(vec![named("Ana"), named("Binh")])
            .await
            .unwrap();
        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.find_all().await.unwrap().is_empty());

        // Deleting an empty table succeeds with a zero count
        assert_eq!(repo.delete_all().await.unwrap(), 0);
    }
}
