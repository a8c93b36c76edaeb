//! Worker roster service
//!
//! HTTP API for managing migrant-labor roster records ("workers"), backed by
//! an embedded document store.
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # Configuration, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Models and repositories over the document store
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger setup
pub use crate::utils::logger::init_logger;
