use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

// Uniqueness on employees.employee_id, employees.email and
// (attendance.employee_id, attendance.date) plus the FK cascade are the
// durable contract; they must hold even under concurrent writers, so they
// live in the schema rather than in application code.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id TEXT NOT NULL UNIQUE,
        full_name   TEXT NOT NULL,
        email       TEXT NOT NULL UNIQUE,
        department  TEXT NOT NULL,
        created_at  DATETIME NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
        date        DATE NOT NULL,
        status      TEXT NOT NULL,
        UNIQUE (employee_id, date)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS idx_attendance_employee ON attendance(employee_id)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date)"#,
];

pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    // foreign_keys is per-connection in SQLite; setting it on the connect
    // options covers every pooled connection, and cascade delete depends on it.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
