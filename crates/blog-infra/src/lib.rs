//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`: the
//! PostgreSQL storage client, the posts repository, and the SQL-file
//! migration runner.

pub mod database;

pub use database::PostgresPostRepository;
