mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use chrono::Local;
use serde_json::{json, Value};

use hrms_lite::routes;

use common::{seed_employee, test_pool};

macro_rules! app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn create_employee_returns_created_record() {
    let pool = test_pool().await;
    let app = app!(pool);

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(json!({
            "employee_id": "EMP001",
            "full_name": "Ada Lovelace",
            "email": "ada@x.com",
            "department": "Engineering"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["employee_id"], "EMP001");
    assert_eq!(body["full_name"], "Ada Lovelace");
    assert_eq!(body["total_present_days"], 0);
    assert!(body["id"].is_i64());
    assert!(body["created_at"].is_string());
}

#[actix_web::test]
async fn duplicate_create_is_conflict() {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001", "ada@x.com").await;
    let app = app!(pool);

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(json!({
            "employee_id": "EMP001",
            "full_name": "Grace Hopper",
            "email": "grace@x.com",
            "department": "Engineering"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("EMP001"));
}

#[actix_web::test]
async fn invalid_payloads_are_unprocessable() {
    let pool = test_pool().await;
    let app = app!(pool);

    // Broken email syntax.
    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(json!({
            "employee_id": "EMP001",
            "full_name": "Ada Lovelace",
            "email": "not-an-email",
            "department": "Engineering"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("email"));

    // Empty required field.
    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(json!({
            "employee_id": "",
            "full_name": "Ada Lovelace",
            "email": "ada@x.com",
            "department": "Engineering"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Status outside {Present, Absent} dies at deserialization.
    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({
            "employee_id": "EMP001",
            "date": "2024-01-01",
            "status": "Late"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn list_employees_includes_present_day_counts() {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001", "ada@x.com").await;
    let app = app!(pool);

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({
            "employee_id": "EMP001",
            "date": "2024-01-01",
            "status": "Present"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/employees").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["employees"][0]["employee_id"], "EMP001");
    assert_eq!(body["employees"][0]["total_present_days"], 1);
}

#[actix_web::test]
async fn mark_attendance_resolves_employee_identity() {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001", "ada@x.com").await;
    let app = app!(pool);

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({
            "employee_id": "EMP001",
            "date": "2024-01-01",
            "status": "Present"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["employee_string_id"], "EMP001");
    assert_eq!(body["employee_name"], "Ada Lovelace");
    assert_eq!(body["date"], "2024-01-01");
    assert_eq!(body["status"], "Present");
    assert!(body["employee_id"].is_i64());
}

#[actix_web::test]
async fn second_mark_for_same_day_is_conflict_naming_prior_status() {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001", "ada@x.com").await;
    let app = app!(pool);

    let payload = json!({
        "employee_id": "EMP001",
        "date": "2024-01-01",
        "status": "Present"
    });

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("Present"));
}

#[actix_web::test]
async fn marking_for_unknown_employee_is_not_found() {
    let pool = test_pool().await;
    let app = app!(pool);

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({
            "employee_id": "NOPE",
            "date": "2024-01-01",
            "status": "Absent"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("NOPE"));
}

#[actix_web::test]
async fn attendance_listing_supports_date_filter() {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001", "ada@x.com").await;
    let app = app!(pool);

    for (date, status) in [("2024-01-01", "Present"), ("2024-01-02", "Absent")] {
        let req = test::TestRequest::post()
            .uri("/attendance")
            .set_json(json!({
                "employee_id": "EMP001",
                "date": date,
                "status": status
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/attendance").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 2);

    let req = test::TestRequest::get()
        .uri("/attendance?date=2024-01-02")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["records"][0]["status"], "Absent");

    let req = test::TestRequest::get()
        .uri("/attendance/EMP001?date=2024-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["records"][0]["status"], "Present");

    let req = test::TestRequest::get().uri("/attendance/NOPE").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Malformed date filter is a validation failure, not a 500.
    let req = test::TestRequest::get()
        .uri("/attendance?date=not-a-date")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn delete_employee_returns_record_then_not_found() {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001", "ada@x.com").await;
    let app = app!(pool);

    let req = test::TestRequest::delete().uri("/employees/EMP001").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["employee_id"], "EMP001");
    assert_eq!(body["total_present_days"], 0);

    let req = test::TestRequest::delete().uri("/employees/EMP001").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn dashboard_reports_today_and_all_time_totals() {
    let pool = test_pool().await;
    let app = app!(pool);

    // Empty store: zeros, never an error.
    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_employees"], 0);
    assert_eq!(body["total_present_today"], 0);
    assert_eq!(body["total_absent_today"], 0);
    assert_eq!(body["employees_summary"], json!([]));

    seed_employee(&pool, "EMP001", "ada@x.com").await;
    let today = Local::now().date_naive().to_string();
    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({
            "employee_id": "EMP001",
            "date": today,
            "status": "Present"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_employees"], 1);
    assert_eq!(body["total_present_today"], 1);
    assert_eq!(body["total_absent_today"], 0);
    assert_eq!(body["employees_summary"][0]["employee_id"], "EMP001");
    assert_eq!(body["employees_summary"][0]["total_present"], 1);
    assert_eq!(body["employees_summary"][0]["total_absent"], 0);
}

#[actix_web::test]
async fn health_endpoint_reports_service_metadata() {
    let pool = test_pool().await;
    let app = app!(pool);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "HRMS Lite");
}
