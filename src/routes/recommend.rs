use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{RecommendError, Recommender};
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest, WelcomeResponse};
use crate::services::CatalogStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Root endpoint
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to NutriAI API!".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_items = match state.catalog.get().await {
        Ok(catalog) => Some(catalog.len()),
        Err(e) => {
            tracing::warn!(
                "Health check could not load catalog from {}: {}",
                state.catalog.path().display(),
                e
            );
            None
        }
    };

    let status = if catalog_items.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_items,
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend meals endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "age": 30,
///   "gender": "female",
///   "weight_kg": 65,
///   "height_cm": 165,
///   "activity_level": "low|moderate|high",
///   "goal": "lose|maintain|gain",
///   "daily_budget_ksh": 300,
///   "dietary_preference": "none|vegetarian|vegan|low_carb",
///   "allergies": ["dairy"],
///   "dislikes": ["omena"]
/// }
/// ```
pub async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();

    tracing::info!(
        age = profile.age,
        gender = ?profile.gender,
        activity = ?profile.activity_level,
        goal = ?profile.goal,
        diet = ?profile.dietary_preference,
        budget_ksh = profile.daily_budget_ksh,
        "Received recommendation request"
    );

    let catalog = match state.catalog.get().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load food catalog: {}", e);
            return error_response(&RecommendError::from(e));
        }
    };

    match state.recommender.recommend(&profile, &catalog) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            tracing::warn!(code = e.code(), "Recommendation failed: {}", e);
            error_response(&e)
        }
    }
}

/// Map an engine error to its JSON error response
pub fn error_response(err: &RecommendError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse {
        error: err.code().to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status() {
        let response = error_response(&RecommendError::NoEligibleFoods);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(&RecommendError::CatalogUnavailable("gone".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = error_response(&RecommendError::InvalidProfile("age".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
