use super::types::{request, response};
use crate::{
    modules::{restaurant::repository, restaurant_pizza},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = payload
        .restaurant_id()
        .ok_or(response::Error::RestaurantNotFound)?;

    let mut conn = ctx.db_conn.pool.acquire().await.map_err(|err| {
        tracing::error!("Failed to acquire database connection: {}", err);
        response::Error::FailedToFetchRestaurant
    })?;

    let restaurant = repository::find_by_id(&mut *conn, id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    restaurant_pizza::repository::find_many_by_restaurant_id(&mut *conn, id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)
        .map(|restaurant_pizzas| {
            response::Success::Restaurant(restaurant.with_restaurant_pizzas(restaurant_pizzas))
        })
}
