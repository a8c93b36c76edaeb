//! Utilities — errors, results, logging

pub mod error;
pub mod logger;
pub mod result;

pub use error::{ApiMessage, AppError, AppJson};
pub use result::AppResult;
