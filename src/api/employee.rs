use actix_web::{web, HttpResponse};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse};
use crate::model::Employee;
use crate::store;
use crate::utils::validate::{require_email, require_text};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "ada@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl CreateEmployee {
    fn validate(&self) -> Result<(), ApiError> {
        require_text("employee_id", &self.employee_id, 50)?;
        require_text("full_name", &self.full_name, 150)?;
        require_email("email", &self.email)?;
        require_text("department", &self.department, 100)?;
        Ok(())
    }
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "ada@company.com")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "2024-01-01T09:00:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
    #[schema(example = 12)]
    pub total_present_days: i64,
}

impl EmployeeResponse {
    fn new(employee: Employee, total_present_days: i64) -> Self {
        Self {
            id: employee.id,
            employee_id: employee.employee_id,
            full_name: employee.full_name,
            email: employee.email,
            department: employee.department,
            created_at: employee.created_at,
            total_present_days,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(example = 1)]
    pub total: i64,
    pub employees: Vec<EmployeeResponse>,
}

/// Add a new employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 409, description = "Duplicate employee_id or email", body = ErrorResponse),
        (status = 422, description = "Malformed input", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let employee = store::employee::create(
        pool.get_ref(),
        &payload.employee_id,
        &payload.full_name,
        &payload.email,
        &payload.department,
    )
    .await?;

    // Freshly created, so no attendance can exist yet.
    Ok(HttpResponse::Created().json(EmployeeResponse::new(employee, 0)))
}

/// Get all employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, newest first, with all-time present-day counts", body = EmployeeListResponse)
    ),
    tag = "Employees"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = store::employee::list_all(pool.get_ref()).await?;

    let mut responses = Vec::with_capacity(employees.len());
    for employee in employees {
        let present_days = store::employee::present_days_count(pool.get_ref(), employee.id).await?;
        responses.push(EmployeeResponse::new(employee, present_days));
    }

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        total: responses.len() as i64,
        employees: responses,
    }))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Human-readable employee id, e.g. EMP001")
    ),
    responses(
        (status = 200, description = "Deleted employee record", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let employee = store::employee::delete_by_employee_id(pool.get_ref(), &employee_id).await?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::new(employee, 0)))
}
