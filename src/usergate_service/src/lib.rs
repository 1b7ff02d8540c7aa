pub mod error_reporting;
pub mod helpers;
pub mod tracing;
pub mod user_service;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use user_service::UserService;
