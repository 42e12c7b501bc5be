//! `PostgreSQL` adapters for task board persistence.

mod models;
mod repository;
mod schema;

pub use repository::{
    PostgresSubtaskRepository, PostgresTaskRepository, TaskPgPool, build_pool,
};
