use crate::modules::pizza::repository::Pizza;
use serde::{Deserialize, Serialize};
use sqlx::{error::ErrorKind, FromRow, SqliteExecutor};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

#[derive(FromRow)]
struct RestaurantPizzaRow {
    id: i64,
    price: i64,
    restaurant_id: i64,
    pizza_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

/// An association as it appears nested under its restaurant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
}

impl From<RestaurantPizzaRow> for RestaurantPizzaWithPizza {
    fn from(row: RestaurantPizzaRow) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

pub struct CreateRestaurantPizzaPayload {
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

#[derive(Debug)]
pub enum Error {
    ReferenceNotFound,
    UnexpectedError,
}

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPizzaPayload,
) -> Result<RestaurantPizza, Error> {
    sqlx::query_as::<_, RestaurantPizza>(
        "
        INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id)
        VALUES ($1, $2, $3)
        RETURNING id, price, restaurant_id, pizza_id
        ",
    )
    .bind(payload.price)
    .bind(payload.restaurant_id)
    .bind(payload.pizza_id)
    .fetch_one(e)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation) => {
            tracing::warn!(
                "Restaurant pizza references a missing pizza or restaurant: {}",
                db_err
            );
            Error::ReferenceNotFound
        }
        err => {
            tracing::error!(
                "Error occurred while trying to create a restaurant pizza: {}",
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn find_many_by_restaurant_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    restaurant_id: i64,
) -> Result<Vec<RestaurantPizzaWithPizza>, Error> {
    sqlx::query_as::<_, RestaurantPizzaRow>(
        "
        SELECT
            restaurant_pizzas.id,
            restaurant_pizzas.price,
            restaurant_pizzas.restaurant_id,
            restaurant_pizzas.pizza_id,
            pizzas.name AS pizza_name,
            pizzas.ingredients AS pizza_ingredients
        FROM restaurant_pizzas
        INNER JOIN pizzas ON pizzas.id = restaurant_pizzas.pizza_id
        WHERE restaurant_pizzas.restaurant_id = $1
        ORDER BY restaurant_pizzas.id
        ",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map(|rows| rows.into_iter().map(RestaurantPizzaWithPizza::from).collect())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching pizzas of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: SqliteExecutor<'e>>(e: E) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM restaurant_pizzas")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to count restaurant pizzas: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_all<'e, E: SqliteExecutor<'e>>(e: E) -> Result<u64, Error> {
    sqlx::query("DELETE FROM restaurant_pizzas")
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete all restaurant pizzas: {}",
                err
            );
            Error::UnexpectedError
        })
}
