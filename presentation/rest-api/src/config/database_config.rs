use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
///
/// # Errors
/// Returns error if DATABASE_URL is not set or connection fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    Ok(pool)
}

/// Apply pending migrations from the directory given by MIGRATIONS_PATH
/// (default: "infrastructure/persistence/migrations")
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    let path = env::var("MIGRATIONS_PATH")
        .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());
    persistence::db::run_migrations(pool, &path).await?;
    Ok(())
}
