use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use hrms_lite::db;
use hrms_lite::model::Employee;
use hrms_lite::store;

/// Fresh in-memory database with the real schema. A single connection that is
/// never recycled, so the in-memory database lives for the whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("memory options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    db::run_migrations(&pool).await.expect("schema");
    pool
}

pub async fn seed_employee(pool: &SqlitePool, employee_id: &str, email: &str) -> Employee {
    store::employee::create(pool, employee_id, "Ada Lovelace", email, "Engineering")
        .await
        .expect("seed employee")
}
