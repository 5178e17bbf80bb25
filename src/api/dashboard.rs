use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::config::{APP_NAME, APP_VERSION};
use crate::error::ApiError;
use crate::store;
use crate::store::dashboard::DashboardResponse;

/// Get dashboard summary statistics
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Aggregate employee/attendance statistics", body = DashboardResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let summary = store::dashboard::summary(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health status")
    ),
    tag = "System"
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": APP_NAME,
        "version": APP_VERSION,
    }))
}

/// Root info
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message and docs pointer")
    ),
    tag = "System"
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": format!("Welcome to {APP_NAME} API"),
        "docs": "/swagger-ui/",
        "version": APP_VERSION,
    }))
}
