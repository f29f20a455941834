pub mod request {
    use serde_json::{Map, Value};
    use validator::Validate;

    /// A key holding `null` is present. Only an absent key is missing.
    #[derive(Debug, Default)]
    pub struct Body {
        pub price: Option<Value>,
        pub pizza_id: Option<Value>,
        pub restaurant_id: Option<Value>,
    }

    impl From<Map<String, Value>> for Body {
        fn from(mut object: Map<String, Value>) -> Self {
            Self {
                price: object.remove("price"),
                pizza_id: object.remove("pizza_id"),
                restaurant_id: object.remove("restaurant_id"),
            }
        }
    }

    pub struct Fields {
        pub price: Value,
        pub pizza_id: Value,
        pub restaurant_id: Value,
    }

    impl Body {
        pub fn into_fields(self) -> Option<Fields> {
            Some(Fields {
                price: self.price?,
                pizza_id: self.pizza_id?,
                restaurant_id: self.restaurant_id?,
            })
        }
    }

    fn integral(number: f64) -> Option<i64> {
        (number.fract() == 0.0 && number >= i64::MIN as f64 && number < i64::MAX as f64)
            .then_some(number as i64)
    }

    /// Ids compare like an INTEGER column: `1`, `1.0`, `"1"` and `"1.0"` all name
    /// row 1, while `1.5`, `"one"`, booleans and `null` name nothing.
    fn as_id(value: &Value) -> Option<i64> {
        match value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().and_then(integral)),
            Value::String(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(integral))
            }
            _ => None,
        }
    }

    impl Fields {
        pub fn pizza_id(&self) -> Option<i64> {
            as_id(&self.pizza_id)
        }

        pub fn restaurant_id(&self) -> Option<i64> {
            as_id(&self.restaurant_id)
        }

        /// Strictly a JSON integer: `25.0` and `"25"` are not prices.
        pub fn price(&self) -> Option<i64> {
            self.price.as_i64()
        }
    }

    #[derive(Validate, Debug)]
    pub struct Payload {
        #[validate(range(
            min = 1,
            max = 30,
            code = "INVALID_PRICE",
            message = "Price must be between 1 and 30"
        ))]
        pub price: i64,
        pub pizza_id: i64,
        pub restaurant_id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::{
            pizza::repository::Pizza, restaurant::repository::Restaurant,
            restaurant_pizza::repository::RestaurantPizza,
        },
        utils::validation::{self, VALIDATION_ERRORS},
    };

    pub enum Success {
        RestaurantPizzaCreated {
            restaurant_pizza: RestaurantPizza,
            pizza: Pizza,
            restaurant: Restaurant,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantPizzaCreated {
                    restaurant_pizza,
                    pizza,
                    restaurant,
                } => (
                    StatusCode::CREATED,
                    Json(json!({
                        "id": restaurant_pizza.id,
                        "price": restaurant_pizza.price,
                        "pizza_id": restaurant_pizza.pizza_id,
                        "restaurant_id": restaurant_pizza.restaurant_id,
                        "pizza": pizza,
                        "restaurant": restaurant,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidRequestBody,
        PizzaOrRestaurantNotFound,
        InvalidPrice,
        FailedToValidate(ValidationErrors),
        FailedToCreateRestaurantPizza,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidRequestBody => {
                    validation::errors_response(StatusCode::BAD_REQUEST, "invalid request body")
                        .into_response()
                }
                Self::PizzaOrRestaurantNotFound => validation::errors_response(
                    StatusCode::NOT_FOUND,
                    "pizza or restaurant not found",
                )
                .into_response(),
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::InvalidPrice | Self::FailedToCreateRestaurantPizza => {
                    validation::errors_response(StatusCode::BAD_REQUEST, VALIDATION_ERRORS)
                        .into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
