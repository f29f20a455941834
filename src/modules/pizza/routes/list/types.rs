pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::pizza::repository::Pizza;

    pub enum Success {
        Pizzas(Vec<Pizza>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Pizzas(pizzas) => (StatusCode::OK, Json(json!(pizzas))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchPizzas,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPizzas => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch pizzas" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
