mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn lists_restaurants_as_flat_records() {
    let app = common::spawn().await;
    let shack = app.restaurant("Karen's Pizza Shack", "address1").await;
    let sanjay = app.restaurant("Sanjay's Pizza", "address2").await;
    let pizza = app.pizza("Emma", "Dough, Tomato Sauce, Cheese").await;
    app.offering(&shack, &pizza, 10).await;

    let response = app.get("/restaurants").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([
            { "id": shack.id, "name": "Karen's Pizza Shack", "address": "address1" },
            { "id": sanjay.id, "name": "Sanjay's Pizza", "address": "address2" },
        ])
    );
}

#[tokio::test]
async fn lists_nothing_when_empty() {
    let app = common::spawn().await;

    let response = app.get("/restaurants").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn reads_restaurant_with_its_pizzas() {
    let app = common::spawn().await;
    let restaurant = app.restaurant("Kiki's Pizza", "address3").await;
    let emma = app.pizza("Emma", "Dough, Tomato Sauce, Cheese").await;
    let geri = app.pizza("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await;
    let first = app.offering(&restaurant, &emma, 5).await;
    let second = app.offering(&restaurant, &geri, 12).await;

    let response = app.get(&format!("/restaurants/{}", restaurant.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "id": restaurant.id,
            "name": "Kiki's Pizza",
            "address": "address3",
            "restaurant_pizzas": [
                {
                    "id": first.id,
                    "price": 5,
                    "pizza_id": emma.id,
                    "restaurant_id": restaurant.id,
                    "pizza": { "id": emma.id, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese" },
                },
                {
                    "id": second.id,
                    "price": 12,
                    "pizza_id": geri.id,
                    "restaurant_id": restaurant.id,
                    "pizza": { "id": geri.id, "name": "Geri", "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni" },
                },
            ],
        })
    );
}

#[tokio::test]
async fn reading_unknown_restaurant_is_not_found() {
    let app = common::spawn().await;

    for uri in ["/restaurants/0", "/restaurants/9999", "/restaurants/karens"] {
        let response = app.get(uri).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(response.json(), json!({ "error": "Restaurant not found" }));
    }
}

#[tokio::test]
async fn deleting_restaurant_removes_its_associations() {
    let app = common::spawn().await;
    let restaurant = app.restaurant("Karen's Pizza Shack", "address1").await;
    let other = app.restaurant("Sanjay's Pizza", "address2").await;
    let pizza = app.pizza("Emma", "Dough, Tomato Sauce, Cheese").await;
    app.offering(&restaurant, &pizza, 1).await;
    app.offering(&restaurant, &pizza, 2).await;
    app.offering(&other, &pizza, 3).await;

    let response = app.delete(&format!("/restaurants/{}", restaurant.id)).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.bytes.is_empty());
    assert_eq!(app.restaurant_pizza_count().await, 1);

    let response = app.get(&format!("/restaurants/{}", restaurant.id)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.get("/pizzas").await;
    assert_eq!(response.json().as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn deleting_unknown_restaurant_is_not_found() {
    let app = common::spawn().await;

    let response = app.delete("/restaurants/42").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), json!({ "error": "Restaurant not found" }));
}

#[tokio::test]
async fn deleting_twice_is_not_found_the_second_time() {
    let app = common::spawn().await;
    let restaurant = app.restaurant("Kiki's Pizza", "address3").await;
    let uri = format!("/restaurants/{}", restaurant.id);

    assert_eq!(app.delete(&uri).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.delete(&uri).await.status, StatusCode::NOT_FOUND);
}
