use super::types::response;
use crate::{modules::pizza::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(&ctx.db_conn.pool)
        .await
        .map(response::Success::Pizzas)
        .map_err(|_| response::Error::FailedToFetchPizzas)
}
