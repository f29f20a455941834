use crate::modules::{pizza, restaurant, restaurant_pizza};
use sqlx::SqlitePool;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const OFFERINGS: [(usize, usize, i64); 3] = [(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to seed the database")]
    UnexpectedError,
}

/// Replaces the contents of all three tables with the sample data set.
pub async fn seed(pool: &SqlitePool) -> Result<Summary, Error> {
    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        Error::UnexpectedError
    })?;

    tracing::info!("Clearing db...");
    restaurant_pizza::repository::delete_all(&mut *tx)
        .await
        .map_err(|_| Error::UnexpectedError)?;
    restaurant::repository::delete_all(&mut *tx)
        .await
        .map_err(|_| Error::UnexpectedError)?;
    pizza::repository::delete_all(&mut *tx)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    tracing::info!("Seeding restaurants...");
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = restaurant::repository::create(
            &mut *tx,
            restaurant::repository::CreateRestaurantPayload {
                name: name.to_string(),
                address: address.to_string(),
            },
        )
        .await
        .map_err(|_| Error::UnexpectedError)?;
        restaurants.push(restaurant);
    }

    tracing::info!("Seeding pizzas...");
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = pizza::repository::create(
            &mut *tx,
            pizza::repository::CreatePizzaPayload {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            },
        )
        .await
        .map_err(|_| Error::UnexpectedError)?;
        pizzas.push(pizza);
    }

    tracing::info!("Seeding restaurant pizzas...");
    for (restaurant_index, pizza_index, price) in OFFERINGS {
        restaurant_pizza::repository::create(
            &mut *tx,
            restaurant_pizza::repository::CreateRestaurantPizzaPayload {
                price,
                restaurant_id: restaurants[restaurant_index].id,
                pizza_id: pizzas[pizza_index].id,
            },
        )
        .await
        .map_err(|_| Error::UnexpectedError)?;
    }

    let restaurant_pizzas = restaurant_pizza::repository::count(&mut *tx)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        Error::UnexpectedError
    })?;

    tracing::info!("Done seeding!");

    Ok(Summary {
        restaurants: restaurants.len(),
        pizzas: pizzas.len(),
        restaurant_pizzas: restaurant_pizzas as usize,
    })
}
