use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::{Attendance, AttendanceStatus};
use crate::store::employee;

/// An attendance row joined with its owning employee. Attendance is addressed
/// externally by the human-readable employee_id string, so every read carries
/// both the surrogate FK and the resolved identity.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "employee_id": 1,
        "employee_string_id": "EMP001",
        "employee_name": "Ada Lovelace",
        "date": "2024-01-01",
        "status": "Present"
    })
)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_string_id: String,
    pub employee_name: String,
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

const RECORD_SELECT: &str = "SELECT a.id, a.employee_id, \
     e.employee_id AS employee_string_id, e.full_name AS employee_name, a.date, a.status \
     FROM attendance a JOIN employees e ON e.id = a.employee_id";

/// Marks attendance for one employee on one date. Fails NotFound when the
/// employee_id string does not resolve, and Conflict when a record for that
/// date already exists; the conflict message reports the status that is
/// already on file.
pub async fn mark(
    pool: &SqlitePool,
    employee_id: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<AttendanceRecord, ApiError> {
    let employee = employee::find_by_employee_id(pool, employee_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Employee with ID '{employee_id}' not found."))
        })?;

    let existing = sqlx::query_as::<_, Attendance>(
        "SELECT id, employee_id, date, status FROM attendance WHERE employee_id = ? AND date = ?",
    )
    .bind(employee.id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    let already_marked = |status: AttendanceStatus| {
        format!("Attendance for employee '{employee_id}' on {date} already marked as '{status}'.")
    };

    if let Some(existing) = existing {
        return Err(ApiError::Conflict(already_marked(existing.status)));
    }

    let inserted = sqlx::query_as::<_, Attendance>(
        "INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?) \
         RETURNING id, employee_id, date, status",
    )
    .bind(employee.id)
    .bind(date)
    .bind(status)
    .fetch_one(pool)
    .await
    // Two concurrent marks for the same day: the unique index on
    // (employee_id, date) rejects the loser.
    .map_err(|e| ApiError::from(e).on_unique_violation(already_marked(status)))?;

    info!(employee_id, %date, %status, "Attendance marked");

    Ok(AttendanceRecord {
        id: inserted.id,
        employee_id: inserted.employee_id,
        employee_string_id: employee.employee_id,
        employee_name: employee.full_name,
        date: inserted.date,
        status: inserted.status,
    })
}

/// All attendance records, newest date first, optionally restricted to one date.
pub async fn list_all(
    pool: &SqlitePool,
    date: Option<NaiveDate>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let records = match date {
        Some(date) => {
            let sql = format!("{RECORD_SELECT} WHERE a.date = ? ORDER BY a.date DESC, a.id DESC");
            sqlx::query_as::<_, AttendanceRecord>(&sql)
                .bind(date)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{RECORD_SELECT} ORDER BY a.date DESC, a.id DESC");
            sqlx::query_as::<_, AttendanceRecord>(&sql).fetch_all(pool).await?
        }
    };
    Ok(records)
}

/// Attendance records for a single employee, resolved by the human-readable
/// employee_id. Fails NotFound when the employee does not exist; an employee
/// with no records yields an empty list.
pub async fn list_for_employee(
    pool: &SqlitePool,
    employee_id: &str,
    date: Option<NaiveDate>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let employee = employee::find_by_employee_id(pool, employee_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Employee with ID '{employee_id}' not found."))
        })?;

    let records = match date {
        Some(date) => {
            let sql = format!(
                "{RECORD_SELECT} WHERE a.employee_id = ? AND a.date = ? \
                 ORDER BY a.date DESC, a.id DESC"
            );
            sqlx::query_as::<_, AttendanceRecord>(&sql)
                .bind(employee.id)
                .bind(date)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!(
                "{RECORD_SELECT} WHERE a.employee_id = ? ORDER BY a.date DESC, a.id DESC"
            );
            sqlx::query_as::<_, AttendanceRecord>(&sql)
                .bind(employee.id)
                .fetch_all(pool)
                .await?
        }
    };
    Ok(records)
}
