// src/routes.rs

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    docs,
    handlers::{baike, health},
    state::AppState,
    utils::jwt::{TOKEN_HEADER, auth_middleware},
};

/// Assembles the main application router.
///
/// * `/baike/*` is guarded by the JWT middleware.
/// * `/health` and the OpenAPI document are public.
/// * Trace and CORS layers wrap everything.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(TOKEN_HEADER),
        ]);

    let baike_routes = Router::new()
        .route("/createBaike", post(baike::create_baike))
        .route("/deleteBaike", delete(baike::delete_baike))
        .route("/deleteBaikeByIds", delete(baike::delete_baike_by_ids))
        .route("/updateBaike", put(baike::update_baike))
        .route("/findBaike", get(baike::find_baike))
        .route("/getBaikeList", get(baike::get_baike_list))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .nest("/baike", baike_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
