use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::ApiError;
use crate::model::{AttendanceStatus, Employee};

const EMPLOYEE_COLUMNS: &str = "id, employee_id, full_name, email, department, created_at";

pub async fn find_by_employee_id(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<Employee>, ApiError> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_by_pk(pool: &SqlitePool, pk: i64) -> Result<Option<Employee>, ApiError> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(pk)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Employee>, ApiError> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

/// All employees, newest first. The surrogate id tiebreak keeps the order
/// stable for rows created within the same second.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let sql =
        format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY created_at DESC, id DESC");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

/// Creates an employee, rejecting duplicates up front so the error can name
/// the conflicting field. The employee_id check runs before the email check;
/// the first violation found is the one reported.
pub async fn create(
    pool: &SqlitePool,
    employee_id: &str,
    full_name: &str,
    email: &str,
    department: &str,
) -> Result<Employee, ApiError> {
    if find_by_employee_id(pool, employee_id).await?.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee with ID '{employee_id}' already exists."
        )));
    }

    if find_by_email(pool, email).await?.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee with email '{email}' already exists."
        )));
    }

    let sql = format!(
        "INSERT INTO employees (employee_id, full_name, email, department, created_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING {EMPLOYEE_COLUMNS}"
    );
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(employee_id)
        .bind(full_name)
        .bind(email)
        .bind(department)
        .bind(Utc::now().naive_utc())
        .fetch_one(pool)
        .await
        // A concurrent create can slip between the checks and the insert; the
        // unique indexes still reject it.
        .map_err(|e| {
            ApiError::from(e).on_unique_violation(format!(
                "Employee with ID '{employee_id}' already exists."
            ))
        })?;

    info!(employee_id, "Employee created");
    Ok(employee)
}

/// Deletes an employee by their human-readable id and returns the deleted
/// record. The FK cascade removes the employee's attendance rows atomically
/// with the employee row.
pub async fn delete_by_employee_id(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Employee, ApiError> {
    let employee = find_by_employee_id(pool, employee_id).await?.ok_or_else(|| {
        ApiError::NotFound(format!("Employee with ID '{employee_id}' not found."))
    })?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(employee.id)
        .execute(pool)
        .await?;

    info!(employee_id, "Employee deleted");
    Ok(employee)
}

/// All-time count of days the employee was marked Present.
pub async fn present_days_count(pool: &SqlitePool, pk: i64) -> Result<i64, ApiError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE employee_id = ? AND status = ?",
    )
    .bind(pk)
    .bind(AttendanceStatus::Present)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
