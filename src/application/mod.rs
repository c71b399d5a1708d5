//! Application layer - Use cases and orchestration

pub mod check;
pub mod init;
pub mod manage_config;
pub mod todo_service;

pub use check::{check_file, CheckSummary};
pub use init::{init, InitOptions};
pub use manage_config::ConfigService;
pub use todo_service::TodoService;
