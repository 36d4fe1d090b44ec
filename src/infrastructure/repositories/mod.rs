// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres;

pub use error::map_sqlx;
pub use memory::InMemoryTransactionManager;
pub use postgres::{PostgresTransactionManager, PostgresUnitOfWork};
