use crate::modules::restaurant_pizza::repository::RestaurantPizzaWithPizza;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteExecutor};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl Restaurant {
    pub fn with_restaurant_pizzas(
        self,
        restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
    ) -> RestaurantWithPizzas {
        RestaurantWithPizzas {
            id: self.id,
            name: self.name,
            address: self.address,
            restaurant_pizzas,
        }
    }
}

/// Full representation of a restaurant, including what it sells.
#[derive(Serialize, Clone, Debug)]
pub struct RestaurantWithPizzas {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub address: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (name, address)
        VALUES ($1, $2)
        RETURNING id, name, address
        ",
    )
    .bind(payload.name)
    .bind(payload.address)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching restaurant with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(e: E) -> Result<Vec<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants ORDER BY id")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch many restaurants: {}",
                err
            );
            Error::UnexpectedError
        })
}

/// Associations go with the restaurant through `ON DELETE CASCADE`.
pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        "DELETE FROM restaurants WHERE id = $1 RETURNING id, name, address",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to delete a restaurant by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_all<'e, E: SqliteExecutor<'e>>(e: E) -> Result<u64, Error> {
    sqlx::query("DELETE FROM restaurants")
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete all restaurants: {}",
                err
            );
            Error::UnexpectedError
        })
}
