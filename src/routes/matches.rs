use actix_web::{web, HttpResponse, Responder};
use crate::core::ResultFilter;
use crate::models::{ErrorResponse, HealthResponse, MatchQuery, MatchRequest, PreferenceError, UserPreference};
use crate::routes::AppState;

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/neurotypes", web::get().to(list_neurotypes))
        .route("/matches", web::get().to(find_matches))
        .route("/matches", web::post().to(find_matches_json));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        courses: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/neurotypes
///
/// Returns the scoring profile of every supported neurotype.
async fn list_neurotypes(state: web::Data<AppState>) -> impl Responder {
    let profiles: Vec<_> = state.matcher.profiles().iter().collect();
    HttpResponse::Ok().json(profiles)
}

/// Find matches endpoint
///
/// GET /api/matches
///
/// Query parameters (list values are JSON arrays):
/// - `neurotype` (required)
/// - `preferences` (required), e.g. `["Short lessons (under 15 min)"]`
/// - `topics` (required), e.g. `["python"]`
/// - `accessibility`, e.g. `["Captions required"]`
/// - `minMatch`, `priceTypes`, `skillLevels`, `platforms` narrow the result
async fn find_matches(
    state: web::Data<AppState>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    let parsed = query
        .to_preference()
        .and_then(|preference| query.to_filter().map(|filter| (preference, filter)));

    match parsed {
        Ok((preference, filter)) => respond_with_matches(&state, &preference, &filter),
        Err(e) => preference_error(e),
    }
}

/// Find matches endpoint
///
/// POST /api/matches
///
/// Request body:
/// ```json
/// {
///   "neurotype": "ADHD",
///   "learningPreferences": ["Gamified experience"],
///   "topics": ["python"],
///   "accessibilityNeeds": ["Captions required"]
/// }
/// ```
async fn find_matches_json(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    match req.to_preference() {
        Ok(preference) => respond_with_matches(&state, &preference, &ResultFilter::default()),
        Err(e) => preference_error(e),
    }
}

fn respond_with_matches(state: &AppState, preference: &UserPreference, filter: &ResultFilter) -> HttpResponse {
    let matches = state.matcher.get_matched_courses(state.catalog.as_ref(), preference);
    let total = matches.len();
    let matches = filter.apply(matches);

    tracing::info!(
        "Returning {} matches for {} profile (topics: {:?}, {} before filtering)",
        matches.len(),
        preference.neurotype,
        preference.topics,
        total
    );

    HttpResponse::Ok().json(matches)
}

fn preference_error(e: PreferenceError) -> HttpResponse {
    tracing::info!("Rejected match request: {}", e);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: e.code().to_string(),
        message: e.to_string(),
        status_code: 400,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_error_response_is_bad_request() {
        let response = preference_error(PreferenceError::MissingParameter("topics"));
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
