use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{ConversationStarterGenerator, MatchFinder};
use crate::models::{
    ClearCacheResponse, CompatibilityRequest, FindMatchesRequest, FindMatchesResponse,
    HealthResponse, MatchOptions, StartersRequest, StartersResponse,
};
use crate::routes::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub finder: MatchFinder,
    pub starters: ConversationStarterGenerator,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(finder: MatchFinder, matching: MatchingSettings) -> Self {
        Self {
            finder,
            starters: ConversationStarterGenerator::new(),
            matching,
        }
    }

    /// Resolve a requested limit against the configured default and cap
    fn resolve_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(self.matching.default_limit)
            .min(self.matching.max_limit)
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(calculate_compatibility))
        .route("/matches/find", web::post().to(find_matches))
        .route("/starters", web::post().to(conversation_starters))
        .route("/cache", web::delete().to(clear_cache));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache: state.finder.engine().cache_stats(),
    })
}

/// Pairwise compatibility endpoint
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// { "profileA": { "id": "a", ... }, "profileB": { "id": "b", ... } }
/// ```
async fn calculate_compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let score = state
        .finder
        .engine()
        .calculate_compatibility(&req.profile_a, &req.profile_b)
        .await;

    tracing::info!(
        "Compatibility {} <-> {}: {}",
        req.profile_a.id,
        req.profile_b.id,
        score.overall
    );

    Ok(HttpResponse::Ok().json(score))
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", ... },
///   "candidates": [{ "id": "string", ... }],
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let options = MatchOptions::with_limit(state.resolve_limit(req.limit));

    tracing::info!(
        "Finding matches for {} among {} candidates, limit: {}",
        req.subject.id,
        req.candidates.len(),
        options.limit
    );

    let result = state
        .finder
        .find_matches(&req.subject, &req.candidates, &options)
        .await;

    tracing::info!(
        "Returning {} matches for {} (from {} candidates)",
        result.matches.len(),
        req.subject.id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    }))
}

/// Conversation starters endpoint
///
/// POST /api/v1/starters
///
/// Scores the pair (cache-backed) and returns three suggested openers from
/// `profileA` to `profileB`.
async fn conversation_starters(
    state: web::Data<AppState>,
    req: web::Json<StartersRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let score = state
        .finder
        .engine()
        .calculate_compatibility(&req.profile_a, &req.profile_b)
        .await;
    let starters = state.starters.generate(&req.profile_a, &req.profile_b, &score);

    Ok(HttpResponse::Ok().json(StartersResponse { score, starters }))
}

/// Clear the score cache
///
/// DELETE /api/v1/cache
async fn clear_cache(state: web::Data<AppState>) -> HttpResponse {
    state.finder.engine().clear_cache();
    tracing::info!("Score cache cleared on request");
    HttpResponse::Ok().json(ClearCacheResponse { cleared: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::error::handle_json_payload_error;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn create_state() -> AppState {
        AppState::new(MatchFinder::with_default_engine(), MatchingSettings::default())
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                    .configure(crate::routes::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check_response() {
        let app = init_app!(create_state());
        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["cache"]["computations"], 0);
    }

    #[actix_web::test]
    async fn test_compatibility_endpoint() {
        let app = init_app!(create_state());
        let req = test::TestRequest::post()
            .uri("/api/v1/compatibility")
            .set_json(json!({
                "profileA": {"id": "a", "title": "CTO", "industry": "Technology"},
                "profileB": {"id": "b", "title": "Senior Engineer", "industry": "Technology"}
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["breakdown"]["professional"], 95);
        assert!(body["overall"].as_u64().unwrap() <= 100);
    }

    #[actix_web::test]
    async fn test_compatibility_accepts_null_fields() {
        let app = init_app!(create_state());
        let req = test::TestRequest::post()
            .uri("/api/v1/compatibility")
            .set_json(json!({
                "profileA": {"id": "a", "interests": null, "industry": null},
                "profileB": {"id": "b", "goals": null, "plannedSessions": null}
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["breakdown"]["interests"], 50);
    }

    #[actix_web::test]
    async fn test_find_matches_caps_limit() {
        let mut state = create_state();
        state.matching.max_limit = 2;
        let app = init_app!(state);

        let candidates: Vec<Value> = (0..5).map(|i| json!({"id": i.to_string()})).collect();
        let req = test::TestRequest::post()
            .uri("/api/v1/matches/find")
            .set_json(json!({"subject": {"id": "me"}, "candidates": candidates, "limit": 10}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["matches"].as_array().unwrap().len(), 2);
        assert_eq!(body["totalResults"], 5);
    }

    #[actix_web::test]
    async fn test_find_matches_rejects_empty_id() {
        let app = init_app!(create_state());
        let req = test::TestRequest::post()
            .uri("/api/v1/matches/find")
            .set_json(json!({"subject": {"id": ""}, "candidates": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_failed");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = init_app!(create_state());
        let req = test::TestRequest::post()
            .uri("/api/v1/compatibility")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_starters_endpoint_returns_three() {
        let app = init_app!(create_state());
        let req = test::TestRequest::post()
            .uri("/api/v1/starters")
            .set_json(json!({
                "profileA": {"id": "a", "company": "Acme"},
                "profileB": {"id": "b", "company": "Globex"}
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["starters"].as_array().unwrap().len(), 3);
        assert!(body["score"]["overall"].is_u64());
    }

    #[actix_web::test]
    async fn test_clear_cache_endpoint() {
        let state = create_state();
        let engine = state.finder.engine().clone();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/compatibility")
            .set_json(json!({"profileA": {"id": "a"}, "profileB": {"id": "b"}}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/v1/cache").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cleared"], true);

        let req = test::TestRequest::post()
            .uri("/api/v1/compatibility")
            .set_json(json!({"profileA": {"id": "b"}, "profileB": {"id": "a"}}))
            .to_request();
        test::call_service(&app, req).await;

        assert_eq!(engine.cache_stats().computations, 2);
    }
}
