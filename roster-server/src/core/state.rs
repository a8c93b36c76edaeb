use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::WorkerRepository;
use crate::utils::AppError;

/// Server state shared by every request handler.
///
/// Holds the configuration and the record-store handle. The store is opened
/// once at startup and injected here explicitly; handlers never reach for
/// ambient globals, which keeps them testable against a substitute store.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded document store handle
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize server state: working directory, then the record store
    /// (including its table schema).
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_path()).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// Worker repository bound to this state's store handle.
    pub fn workers(&self) -> WorkerRepository {
        WorkerRepository::new(self.db.clone())
    }
}
