use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use rand::{rngs::StdRng, SeedableRng};
use validator::Validate;

use crate::core::Matcher;
use crate::error::MatchError;
use crate::models::{
    CompleteOutfitRequest, ErrorResponse, GenerateOutfitRequest, HealthResponse, OutfitResponse,
    RequestContext, WardrobeItem,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_wardrobe_items: usize,
}

/// Configure all outfit-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/outfits/complete", web::post().to(complete_outfit))
        .route("/outfits/generate", web::post().to(generate_outfit));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Complete an outfit around a seed garment
///
/// POST /api/v1/outfits/complete
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "mood": "confident",
///   "occasion": "party",
///   "weather": "cold",
///   "seedCategory": "top",
///   "wardrobeItems": [{"id": "string", "name": "string", "category": "pants"}],
///   "seed": 42
/// }
/// ```
async fn complete_outfit(
    state: web::Data<AppState>,
    req: web::Json<CompleteOutfitRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for complete_outfit request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if !req.has_seed() {
        return bad_request(
            "Missing seed",
            "seedCategory or seedItem is required to complete an outfit".to_string(),
        );
    }

    if let Some(response) = check_wardrobe_size(&state, req.wardrobe_items.len()) {
        return response;
    }

    tracing::info!(
        "Completing outfit for user: {}, seed: {:?}, wardrobe: {} items",
        req.user_id,
        req.seed_category.or(req.seed_item.as_ref().map(|i| i.category)),
        req.wardrobe_items.len()
    );

    recommend(&state, &req.user_id, &req.wardrobe_items, &req.context(), req.seed)
}

/// Generate a full outfit from the wardrobe
///
/// POST /api/v1/outfits/generate
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "mood": "relaxed",
///   "occasion": "daily",
///   "weather": "moderate",
///   "wardrobeItems": [{"id": "string", "name": "string", "category": "top"}]
/// }
/// ```
async fn generate_outfit(
    state: web::Data<AppState>,
    req: web::Json<GenerateOutfitRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate_outfit request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if let Some(response) = check_wardrobe_size(&state, req.wardrobe_items.len()) {
        return response;
    }

    tracing::info!(
        "Generating outfit for user: {}, wardrobe: {} items",
        req.user_id,
        req.wardrobe_items.len()
    );

    recommend(&state, &req.user_id, &req.wardrobe_items, &req.context(), req.seed)
}

/// Run the matcher and render its result or failure
fn recommend(
    state: &AppState,
    user_id: &str,
    wardrobe: &[WardrobeItem],
    context: &RequestContext,
    seed: Option<u64>,
) -> HttpResponse {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let request_id = uuid::Uuid::new_v4().to_string();

    match state.matcher.recommend(wardrobe, context, &mut rng) {
        Ok(result) => {
            tracing::info!(
                "Returning {} selections for user {} (request {})",
                result.len(),
                user_id,
                request_id
            );
            HttpResponse::Ok().json(OutfitResponse::from_result(request_id, result))
        }
        Err(e) => {
            tracing::info!("No outfit for user {} (request {}): {}", user_id, request_id, e);
            match_error_response(&e)
        }
    }
}

fn check_wardrobe_size(state: &AppState, len: usize) -> Option<HttpResponse> {
    if len > state.max_wardrobe_items {
        return Some(bad_request(
            "Wardrobe too large",
            format!(
                "wardrobe has {} items, at most {} are accepted",
                len, state.max_wardrobe_items
            ),
        ));
    }
    None
}

fn match_error_response(err: &MatchError) -> HttpResponse {
    let status = match err {
        MatchError::InvalidContext(_) => StatusCode::BAD_REQUEST,
        MatchError::NoMatchFound { .. } => StatusCode::NOT_FOUND,
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: err.kind().to_string(),
        message: err.user_message(),
        status_code: status.as_u16(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}
