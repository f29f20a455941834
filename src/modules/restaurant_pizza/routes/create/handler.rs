use super::service::service;
use super::types::request;
use crate::types::Context;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::IntoResponse,
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(object)) => Some(request::Body::from(object)),
        Err(rejection) => {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            None
        }
    };

    service(ctx, body).await
}
