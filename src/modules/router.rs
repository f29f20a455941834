use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{pizza, restaurant, restaurant_pizza};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to Pizza Restaurants API" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/restaurants", restaurant::get_router())
        .nest("/pizzas", pizza::get_router())
        .nest("/restaurant_pizzas", restaurant_pizza::get_router())
}
