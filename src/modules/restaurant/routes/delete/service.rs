use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = payload
        .id
        .parse::<i64>()
        .map_err(|_| response::Error::RestaurantNotFound)?;

    repository::delete_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::FailedToDeleteRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)
        .map(|restaurant| {
            tracing::info!("Deleted restaurant {} ({})", restaurant.id, restaurant.name);
            response::Success::RestaurantDeleted
        })
}
