mod common;

use axum::http::StatusCode;
use pizza_restaurants_rs::modules::seed;

#[tokio::test]
async fn seeding_replaces_existing_rows() {
    let app = common::spawn().await;
    app.restaurant("Leftover", "nowhere").await;

    let expected = seed::Summary {
        restaurants: 3,
        pizzas: 3,
        restaurant_pizzas: 3,
    };
    assert_eq!(seed::seed(&app.ctx.db_conn.pool).await.unwrap(), expected);
    assert_eq!(seed::seed(&app.ctx.db_conn.pool).await.unwrap(), expected);

    let response = app.get("/restaurants").await;
    assert_eq!(response.status, StatusCode::OK);
    let restaurants = response.json();
    let names: Vec<_> = restaurants
        .as_array()
        .unwrap()
        .iter()
        .map(|restaurant| restaurant["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["Karen's Pizza Shack", "Sanjay's Pizza", "Kiki's Pizza"]
    );

    let first = restaurants[0]["id"].as_i64().unwrap();
    let response = app.get(&format!("/restaurants/{first}")).await;
    assert_eq!(response.json()["restaurant_pizzas"][0]["price"], 1);
}
