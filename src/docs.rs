// src/docs.rs

use axum::Json;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

use crate::{
    handlers::baike,
    models::{baike::Baike, request::IdsReq},
    response::Envelope,
    utils::jwt::TOKEN_HEADER,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        baike::create_baike,
        baike::delete_baike,
        baike::delete_baike_by_ids,
        baike::update_baike,
        baike::find_baike,
        baike::get_baike_list,
    ),
    components(schemas(Baike, IdsReq, Envelope)),
    modifiers(&SecurityAddon),
    tags((name = "Baike", description = "Multiple-choice question management"))
)]
pub struct ApiDoc;

/// Registers the `ApiKeyAuth` scheme referenced by every Baike path.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "ApiKeyAuth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
        );
    }
}

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
