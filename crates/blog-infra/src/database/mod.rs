//! Database connection management and the posts repository.

mod connections;
pub mod entity;
pub mod migrate;
mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::PostgresPostRepository;

// Re-exported so binaries don't need a direct sea-orm dependency.
pub use sea_orm::{DbConn, DbErr};
