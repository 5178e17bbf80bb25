use utoipa::OpenApi;

use crate::api::attendance::{AttendanceListResponse, MarkAttendance};
use crate::api::employee::{CreateEmployee, EmployeeListResponse, EmployeeResponse};
use crate::error::ErrorResponse;
use crate::model::{AttendanceStatus, Employee};
use crate::store::attendance::AttendanceRecord;
use crate::store::dashboard::{DashboardEmployeeSummary, DashboardResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A lightweight Human Resource Management API: manage employee records and track
daily attendance over a clean RESTful interface.

### Key features
- **Employee management** — create, list, and delete employee records
- **Attendance tracking** — one Present/Absent marking per employee per day
- **Dashboard** — today's headcount plus all-time per-employee totals

### Response format
JSON throughout; failures carry a `detail` message naming the offending
field or value.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::list_employee_attendance,

        crate::api::dashboard::get_dashboard,
        crate::api::dashboard::health_check,
        crate::api::dashboard::root,
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeResponse,
            EmployeeListResponse,
            AttendanceStatus,
            MarkAttendance,
            AttendanceRecord,
            AttendanceListResponse,
            DashboardEmployeeSummary,
            DashboardResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Employees", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
        (name = "Dashboard", description = "Aggregate statistics APIs"),
        (name = "System", description = "Health and service metadata"),
    )
)]
pub struct ApiDoc;
