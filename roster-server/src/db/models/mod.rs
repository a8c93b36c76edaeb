//! Database Models

pub mod serde_helpers;
pub mod worker;

pub use worker::{RmPaidUpdate, Worker, WorkerCreate, WorkerId, WorkerUpdate};
