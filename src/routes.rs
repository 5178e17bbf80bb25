use actix_web::web;

use crate::api::{attendance, dashboard, employee};
use crate::error::ApiError;

/// Wires every route plus the extractor error handlers, so the test harness
/// and `main` assemble identical apps.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Bad JSON bodies and malformed query strings (unknown status values,
    // dates that do not parse) are rejected as validation errors with the
    // same {"detail": ...} body every other failure uses.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/employees")
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            .service(
                web::resource("/{employee_id}")
                    .route(web::delete().to(employee::delete_employee)),
            ),
    )
    .service(
        web::scope("/attendance")
            .service(
                web::resource("")
                    .route(web::post().to(attendance::mark_attendance))
                    .route(web::get().to(attendance::list_attendance)),
            )
            .service(
                web::resource("/{employee_id}")
                    .route(web::get().to(attendance::list_employee_attendance)),
            ),
    )
    .service(web::resource("/dashboard").route(web::get().to(dashboard::get_dashboard)))
    .service(web::resource("/health").route(web::get().to(dashboard::health_check)))
    .service(web::resource("/").route(web::get().to(dashboard::root)));
}
