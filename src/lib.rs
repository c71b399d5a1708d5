//! todofile - To-do list stored in a plain JSON file
//!
//! The core is a file-backed record store: the whole collection is loaded
//! from one JSON array file, changed in memory and written back in full.
//! Records are validated before every write.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TodoError;
