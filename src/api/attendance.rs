use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse};
use crate::model::AttendanceStatus;
use crate::store;
use crate::store::attendance::AttendanceRecord;
use crate::utils::validate::require_text;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    #[schema(example = 1)]
    pub total: i64,
    pub records: Vec<AttendanceRecord>,
}

impl AttendanceListResponse {
    fn new(records: Vec<AttendanceRecord>) -> Self {
        Self {
            total: records.len() as i64,
            records,
        }
    }
}

/// Mark attendance for an employee
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecord),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 409, description = "Already marked for this date; message names the recorded status", body = ErrorResponse),
        (status = 422, description = "Malformed input", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    require_text("employee_id", &payload.employee_id, 50)?;

    let record = store::attendance::mark(
        pool.get_ref(),
        &payload.employee_id,
        payload.date,
        payload.status,
    )
    .await?;

    Ok(HttpResponse::Created().json(record))
}

/// Get all attendance records, optionally filtered by date
#[utoipa::path(
    get,
    path = "/attendance",
    params(
        ("date" = Option<String>, Query, description = "Filter by date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance records, newest date first", body = AttendanceListResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let records = store::attendance::list_all(pool.get_ref(), query.date).await?;
    Ok(HttpResponse::Ok().json(AttendanceListResponse::new(records)))
}

/// Get attendance records for a specific employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Human-readable employee id, e.g. EMP001"),
        ("date" = Option<String>, Query, description = "Filter by date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "That employee's attendance records", body = AttendanceListResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let records =
        store::attendance::list_for_employee(pool.get_ref(), &employee_id, query.date).await?;
    Ok(HttpResponse::Ok().json(AttendanceListResponse::new(records)))
}
