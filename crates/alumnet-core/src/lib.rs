//! # Alumnet Core
//!
//! Shared building blocks for the Alumnet API:
//!
//! - [`file_storage`]: local filesystem storage for uploaded files
//! - [`pagination`]: pagination parameters and response metadata

pub mod file_storage;
pub mod pagination;

pub use file_storage::{LocalFileStorage, StorageError};
pub use pagination::{PaginationMeta, PaginationParams};
