// src/utils/extract.rs

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection is a failure envelope carrying the
/// parser's message instead of axum's plain-text 4xx.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindJson<T>(pub T);

impl<S, T> FromRequest<S> for BindJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Bind(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string counterpart of [`BindJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BindQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for BindQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Bind(rejection.body_text()))?;
        Ok(Self(value))
    }
}
