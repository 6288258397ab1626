//! Migration CLI tool.
//!
//! Applies `migrations/*.sql` in lexical filename order against the database
//! named by the environment. The api-server can do the same at startup with
//! `RUN_MIGRATIONS=true`; this binary exists for running migrations apart
//! from a deploy.

use std::path::Path;

use blog_infra::database::{self, DatabaseConfig, migrate};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = DatabaseConfig::from_env();
    let db = match database::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate::run_migrations(&db, Path::new("migrations")).await {
        tracing::error!("migration failed: {e}");
        std::process::exit(1);
    }
}
