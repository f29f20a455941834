#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use pizza_restaurants_rs::{
    app,
    modules::{
        pizza::repository::{self as pizza_repository, Pizza},
        restaurant::repository::{self as restaurant_repository, Restaurant},
        restaurant_pizza::repository::{self as restaurant_pizza_repository, RestaurantPizza},
    },
    types::{database, AppContext, Context},
    utils::config::DatabaseConfig,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub ctx: Arc<Context>,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap()
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send_to(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse { status, bytes }
}

pub async fn spawn() -> TestApp {
    spawn_with_database("sqlite::memory:", 1).await
}

pub async fn spawn_with_database(url: &str, max_connections: u32) -> TestApp {
    let db_conn = database::connect(&DatabaseConfig {
        url: url.to_string(),
        max_connections,
    })
    .await
    .unwrap();
    database::migrate(&db_conn).await.unwrap();

    let ctx = Arc::new(Context {
        app: AppContext {
            host: String::from("127.0.0.1"),
            port: 0,
        },
        db_conn,
    });

    TestApp {
        router: app::router(ctx.clone()),
        ctx,
    }
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => request.body(Body::empty()),
        }
        .unwrap();

        send_to(self.router(), request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn restaurant(&self, name: &str, address: &str) -> Restaurant {
        restaurant_repository::create(
            &self.ctx.db_conn.pool,
            restaurant_repository::CreateRestaurantPayload {
                name: name.to_string(),
                address: address.to_string(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn pizza(&self, name: &str, ingredients: &str) -> Pizza {
        pizza_repository::create(
            &self.ctx.db_conn.pool,
            pizza_repository::CreatePizzaPayload {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn offering(&self, restaurant: &Restaurant, pizza: &Pizza, price: i64) -> RestaurantPizza {
        restaurant_pizza_repository::create(
            &self.ctx.db_conn.pool,
            restaurant_pizza_repository::CreateRestaurantPizzaPayload {
                price,
                restaurant_id: restaurant.id,
                pizza_id: pizza.id,
            },
        )
        .await
        .unwrap()
    }

    pub async fn restaurant_pizza_count(&self) -> i64 {
        restaurant_pizza_repository::count(&self.ctx.db_conn.pool)
            .await
            .unwrap()
    }
}
