// src/response.rs

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Uniform response body: `{"success": bool, "data": {...}, "msg": "..."}`.
/// Always sent with HTTP 200 unless the request never reached a handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    pub success: bool,
    pub data: Value,
    pub msg: String,
}

impl Envelope {
    pub fn ok_with_message(msg: impl Into<String>) -> Self {
        Self::ok_with_detailed(json!({}), msg)
    }

    /// Success with a payload and the default query message.
    pub fn ok_with_data(data: Value) -> Self {
        Self::ok_with_detailed(data, "查询成功")
    }

    pub fn ok_with_detailed(data: Value, msg: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            msg: msg.into(),
        }
    }

    pub fn fail_with_message(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: json!({}),
            msg: msg.into(),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
