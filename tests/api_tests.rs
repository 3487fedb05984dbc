//! API integration tests
//!
//! Run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api";

/// Unique email per test run so registration never collides
fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}+{}@example.com", tag, nanos)
}

/// Register a fresh user and log in, returning a bearer token
async fn get_auth_token(client: &Client) -> String {
    let email = unique_email("tester");

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "name": "Tester",
            "email": email,
            "password": "secret123",
            "confirm_password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["data"]["token"]
        .as_str()
        .expect("No token in response")
        .to_string()
}

/// Create a category through the API, returning its id
async fn create_category(client: &Client, token: &str, name: &str) -> i64 {
    let response = client
        .post(format!("{}/categories", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": name,
            "description": format!("{} books", name)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_i64().expect("No id in response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_duplicate_email() {
    let client = Client::new();
    let email = unique_email("dup");

    let payload = json!({
        "name": "Dup Tester",
        "email": email,
        "password": "secret123",
        "confirm_password": "secret123"
    });

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], email);
    assert!(body["data"]["password"].is_null(), "password must not be serialized");

    // Same email again must fail with a field-level error
    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert!(body["errors"]["email"][0].is_string());
}

#[tokio::test]
#[ignore]
async fn test_register_password_mismatch() {
    let client = Client::new();

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "name": "Mismatch",
            "email": unique_email("mismatch"),
            "password": "a-strong-password",
            "confirm_password": "a-different-password"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"]["confirm_password"][0].is_string());
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore]
async fn test_login_issues_distinct_tokens() {
    let client = Client::new();
    let email = unique_email("tokens");

    client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "name": "Token Tester",
            "email": email,
            "password": "secret123",
            "confirm_password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    let mut tokens = Vec::new();
    for _ in 0..2 {
        let response = client
            .post(format!("{}/login", BASE_URL))
            .json(&json!({"email": email, "password": "secret123"}))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("Failed to parse response");
        tokens.push(body["data"]["token"].as_str().expect("No token").to_string());
    }

    assert_ne!(tokens[0], tokens[1]);
}

#[tokio::test]
#[ignore]
async fn test_category_crud_round_trip() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let id = create_category(&client, &token, "Fiction").await;

    // Read-after-write returns the exact fields submitted
    let response = client
        .get(format!("{}/categories/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Fiction");
    assert_eq!(body["data"]["description"], "Fiction books");

    // Update applied twice yields the same final state
    let update = json!({"name": "Non-fiction", "description": "True stories"});
    for _ in 0..2 {
        let response = client
            .put(format!("{}/categories/{}", BASE_URL, id))
            .header("Authorization", format!("Bearer {}", token))
            .json(&update)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["data"]["name"], "Non-fiction");
    }

    // Destroy, then show yields 404
    let response = client
        .delete(format!("{}/categories/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/categories/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_mutation_rejected() {
    let client = Client::new();

    let count_before = category_count(&client).await;

    let response = client
        .post(format!("{}/categories", BASE_URL))
        .json(&json!({"name": "Fiction", "description": "Fiction books"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Store row count unchanged
    assert_eq!(category_count(&client).await, count_before);
}

async fn category_count(client: &Client) -> usize {
    let response = client
        .get(format!("{}/categories", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"].as_array().expect("data is not a list").len()
}

#[tokio::test]
#[ignore]
async fn test_category_validation_errors() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/categories", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({"name": "Fiction"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert!(body["errors"]["description"][0].is_string());
}

#[tokio::test]
#[ignore]
async fn test_genre_requires_existing_category() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/genres", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Fantasy",
            "description": "Dragons and such",
            "category_id": 999999
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"]["category_id"][0].is_string());
}

#[tokio::test]
#[ignore]
async fn test_genre_listing_includes_relations() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let category_id = create_category(&client, &token, "Speculative").await;

    let response = client
        .post(format!("{}/genres", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Science Fiction",
            "description": "Futures that never were",
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let genre_id = body["data"]["id"].as_i64().expect("No genre id");

    let response = client
        .get(format!("{}/genres", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");

    let listed = body["data"]
        .as_array()
        .expect("data is not a list")
        .iter()
        .find(|g| g["id"].as_i64() == Some(genre_id))
        .expect("created genre missing from listing");
    assert_eq!(listed["category"]["id"].as_i64(), Some(category_id));
    assert!(listed["books"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_category_delete_restricted_with_genres() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let category_id = create_category(&client, &token, "Crime").await;

    let response = client
        .post(format!("{}/genres", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Noir",
            "description": "Rainy streets",
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/categories/{}", BASE_URL, category_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_genre_delete_restricted_with_books() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let category_id = create_category(&client, &token, "Horror").await;

    let response = client
        .post(format!("{}/genres", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Gothic",
            "description": "Old houses, bad weather",
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let genre_id = body["data"]["id"].as_i64().expect("No genre id");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "The Haunting of Hill House",
            "description": "Not sane, Hill House",
            "pages": 246,
            "published_at": "1959-10-16",
            "author": "Shirley Jackson",
            "price": "14.99",
            "genre_id": genre_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/genres/{}", BASE_URL, genre_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Genre must still exist after the refused delete
    let response = client
        .get(format!("{}/genres/{}", BASE_URL, genre_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_book_crud_round_trip() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let category_id = create_category(&client, &token, "Adventure").await;

    let response = client
        .post(format!("{}/genres", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Epic",
            "description": "Long journeys",
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let genre_id = body["data"]["id"].as_i64().expect("No genre id");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "The Hobbit",
            "description": "There and back again",
            "pages": 310,
            "published_at": "1937-09-21",
            "author": "J.R.R. Tolkien",
            "price": "19.99",
            "genre_id": genre_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["data"]["id"].as_i64().expect("No book id");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "The Hobbit");
    assert_eq!(body["data"]["pages"], 310);
    assert_eq!(body["data"]["published_at"], "1937-09-21");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_book_requires_existing_genre() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Orphan Book",
            "description": "No genre",
            "pages": 100,
            "published_at": "2020-01-01",
            "author": "Nobody",
            "price": "9.99",
            "genre_id": 999999
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"]["genre_id"][0].is_string());
}

#[tokio::test]
#[ignore]
async fn test_show_missing_id_is_404() {
    let client = Client::new();

    for resource in ["categories", "genres", "books"] {
        let response = client
            .get(format!("{}/{}/999999", BASE_URL, resource))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404, "resource {}", resource);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
    }
}
