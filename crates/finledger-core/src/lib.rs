//! Core data model and file-backed persistence for finledger

pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use models::Transaction;
pub use store::Store;
