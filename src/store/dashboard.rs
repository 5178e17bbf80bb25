use chrono::{Local, NaiveDate};
use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::AttendanceStatus;

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct DashboardEmployeeSummary {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 12)]
    pub total_present: i64,
    #[schema(example = 3)]
    pub total_absent: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    #[schema(example = 25)]
    pub total_employees: i64,
    #[schema(example = 20)]
    pub total_present_today: i64,
    #[schema(example = 5)]
    pub total_absent_today: i64,
    pub employees_summary: Vec<DashboardEmployeeSummary>,
}

async fn count_for_date(
    pool: &SqlitePool,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<i64, ApiError> {
    let count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
            .bind(date)
            .bind(status)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

/// Point-in-time dashboard roll-up. Nothing is cached; every call recomputes
/// from the store, so the result is never stale. "Today" is the local calendar
/// date at call time. An empty store yields zeros and an empty summary list.
pub async fn summary(pool: &SqlitePool) -> Result<DashboardResponse, ApiError> {
    let today = Local::now().date_naive();

    let total_employees = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;

    let total_present_today = count_for_date(pool, today, AttendanceStatus::Present).await?;
    let total_absent_today = count_for_date(pool, today, AttendanceStatus::Absent).await?;

    // Per-employee all-time totals in one grouped pass; a LEFT JOIN so that
    // employees with no attendance still appear with zero counts.
    let employees_summary = sqlx::query_as::<_, DashboardEmployeeSummary>(
        "SELECT e.employee_id, e.full_name, e.department, \
                COUNT(CASE WHEN a.status = ? THEN 1 END) AS total_present, \
                COUNT(CASE WHEN a.status = ? THEN 1 END) AS total_absent \
         FROM employees e \
         LEFT JOIN attendance a ON a.employee_id = e.id \
         GROUP BY e.id \
         ORDER BY e.created_at DESC, e.id DESC",
    )
    .bind(AttendanceStatus::Present)
    .bind(AttendanceStatus::Absent)
    .fetch_all(pool)
    .await?;

    Ok(DashboardResponse {
        total_employees,
        total_present_today,
        total_absent_today,
        employees_summary,
    })
}
