//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod logging;
pub mod repository;
pub mod store;

pub use config::{Config, LoadPolicy};
pub use repository::ListRoot;
pub use store::{JsonFileStore, RecordStore};
