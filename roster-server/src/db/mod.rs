//! Database Module
//!
//! Opens the embedded document store and applies the worker table schema.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "roster";
const DATABASE: &str = "roster";

/// Worker table schema. SCHEMAFULL so the store rejects fields outside the
/// canonical shape; every declared field is optional. Dates are persisted as
/// ISO-8601 strings, coerced by the typed model layer before they get here.
const WORKER_SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS worker SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON worker TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS phoneNumber ON worker TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS status ON worker TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS passportNumber ON worker TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS permitVisaExpiry ON worker TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS RMPaid ON worker TYPE option<number>;
";

/// Database service — owns the embedded store handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk store and apply the table schema.
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self::prepare(db).await?;
        tracing::info!("Database ready at {}", db_path.display());
        Ok(service)
    }

    /// In-memory store with the same schema, for tests.
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(WORKER_SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::WorkerCreate;

    #[tokio::test]
    async fn opens_on_disk_store_and_defines_schema() {
        let tmp = tempfile::tempdir().unwrap();
        let service = DbService::new(&tmp.path().join("roster.db")).await.unwrap();

        let created: Option<models::Worker> = service
            .db
            .create("worker")
            .content(WorkerCreate {
                name: Some("Ana".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let worker = created.expect("record created");
        assert!(worker.id.is_some());
        assert_eq!(worker.name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn schema_definition_is_idempotent() {
        let service = DbService::memory().await.unwrap();

        // Re-applying the schema on an existing store must not fail.
        service
            .db
            .query(WORKER_SCHEMA)
            .await
            .unwrap()
            .check()
            .unwrap();
    }
}
