use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteExecutor};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

pub struct CreatePizzaPayload {
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreatePizzaPayload,
) -> Result<Pizza, Error> {
    sqlx::query_as::<_, Pizza>(
        "
        INSERT INTO pizzas (name, ingredients)
        VALUES ($1, $2)
        RETURNING id, name, ingredients
        ",
    )
    .bind(payload.name)
    .bind(payload.ingredients)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a pizza: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<Option<Pizza>, Error> {
    sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching pizza with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(e: E) -> Result<Vec<Pizza>, Error> {
    sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many pizzas: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_all<'e, E: SqliteExecutor<'e>>(e: E) -> Result<u64, Error> {
    sqlx::query("DELETE FROM pizzas")
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete all pizzas: {}", err);
            Error::UnexpectedError
        })
}
