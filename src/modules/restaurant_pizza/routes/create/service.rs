use super::types::{request, response};
use crate::{
    modules::{pizza, restaurant, restaurant_pizza::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, body: Option<request::Body>) -> response::Response {
    let fields = body
        .and_then(request::Body::into_fields)
        .ok_or(response::Error::InvalidRequestBody)?;

    let pizza = match fields.pizza_id() {
        Some(id) => pizza::repository::find_by_id(&ctx.db_conn.pool, id)
            .await
            .map_err(|_| response::Error::FailedToCreateRestaurantPizza)?,
        None => None,
    };

    let restaurant = match fields.restaurant_id() {
        Some(id) => restaurant::repository::find_by_id(&ctx.db_conn.pool, id)
            .await
            .map_err(|_| response::Error::FailedToCreateRestaurantPizza)?,
        None => None,
    };

    let (pizza, restaurant) = pizza
        .zip(restaurant)
        .ok_or(response::Error::PizzaOrRestaurantNotFound)?;

    let payload = request::Payload {
        price: fields.price().ok_or_else(|| {
            tracing::warn!("Rejected non-integer price: {}", fields.price);
            response::Error::InvalidPrice
        })?,
        pizza_id: pizza.id,
        restaurant_id: restaurant.id,
    };

    payload
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    // A single autocommit insert: the foreign keys catch a pizza or restaurant
    // deleted since the lookup.
    repository::create(
        &ctx.db_conn.pool,
        repository::CreateRestaurantPizzaPayload {
            price: payload.price,
            restaurant_id: payload.restaurant_id,
            pizza_id: payload.pizza_id,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::ReferenceNotFound => response::Error::PizzaOrRestaurantNotFound,
        repository::Error::UnexpectedError => response::Error::FailedToCreateRestaurantPizza,
    })
    .map(|restaurant_pizza| response::Success::RestaurantPizzaCreated {
        restaurant_pizza,
        pizza,
        restaurant,
    })
}
