use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP001",
        "full_name": "Ada Lovelace",
        "email": "ada@company.com",
        "department": "Engineering",
        "created_at": "2024-01-01T09:00:00"
    })
)]
pub struct Employee {
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
}
