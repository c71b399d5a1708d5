//! Domain layer - Records, validation rules and queries

pub mod query;
pub mod record;
pub mod validation;

pub use query::ListQuery;
pub use record::{first_duplicate_id, NewRecord, Record, RecordPatch};
pub use validation::{validate, ValidationReport};
