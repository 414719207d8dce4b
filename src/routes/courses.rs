use actix_web::{web, HttpResponse, Responder};
use crate::models::ErrorResponse;
use crate::routes::AppState;
use crate::services::CourseCatalog;

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/courses", web::get().to(list_courses))
        .route("/courses/{id}", web::get().to(get_course));
}

/// GET /api/courses
async fn list_courses(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.all())
}

/// GET /api/courses/{id}
async fn get_course(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get_by_id(&id) {
        Some(course) => HttpResponse::Ok().json(course),
        None => {
            tracing::debug!("Course not found: {}", id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: format!("No course with id '{}'", id),
                status_code: 404,
            })
        }
    }
}
