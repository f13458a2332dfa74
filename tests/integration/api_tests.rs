//! API integration tests
//!
//! Each test serves a freshly seeded router on an ephemeral port and talks
//! to it with reqwest.

use bookshelf_server::{api, models::book::seed_books, repository::Repository, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Bind to port 0 and return the base URL
async fn start_server() -> String {
    let app = api::create_router(AppState::new(Repository::with_books(seed_books())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{}", addr)
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("Expected an array")
        .iter()
        .map(|b| b["id"].as_i64().expect("No book ID"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_every_seeded_book() {
    let base = start_server().await;
    let client = Client::new();

    for id in 1..=4 {
        let response = client
            .get(format!("{}/book?id={}", base, id))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["id"], id);
    }

    let response = client
        .get(format!("{}/book?id=5", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/book", base))
        .json(&json!({ "title": "T", "authors": ["A"], "year": 2020 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No book ID");
    assert_eq!(id, 5);

    let response = client
        .get(format!("{}/book?id={}", base, id))
        .send()
        .await
        .expect("Failed to send request");

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, json!({ "id": id, "title": "T", "authors": ["A"], "year": 2020 }));
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_many_assigns_increasing_ids() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!([
            { "title": "First", "authors": ["A"], "year": 2001 },
            { "title": "Second", "authors": ["B"], "year": 2002 }
        ]))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(ids(&body), vec![5, 6]);
    assert_eq!(body[1]["title"], "Second");

    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_list_books_query_pipeline() {
    let base = start_server().await;
    let client = Client::new();

    let list = |query: &'static str| {
        let client = client.clone();
        let base = base.clone();
        async move {
            let response = client
                .get(format!("{}/books{}", base, query))
                .send()
                .await
                .expect("Failed to send request");
            assert_eq!(response.status(), StatusCode::OK, "{}", query);
            response.json::<Value>().await.expect("Failed to parse response")
        }
    };

    assert_eq!(ids(&list("").await), vec![1, 2, 3, 4]);
    assert_eq!(ids(&list("?sort=desc").await), vec![4, 3, 2, 1]);
    assert_eq!(ids(&list("?sort=asc").await), vec![1, 2, 3, 4]);
    assert_eq!(ids(&list("?limit=100").await), vec![1, 2, 3, 4]);
    assert_eq!(ids(&list("?limit=2&sort=desc").await), vec![4, 3]);

    let body = list("?title=%D0%A7%D0%B8%D1%81%D1%82%D1%8B%D0%B9").await;
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(body[0]["title"], "Чистый код");

    // Sorting a previous request must not have reordered the store.
    assert_eq!(ids(&list("").await), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_list_books_invalid_limit() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books?limit=many", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "invalid limit parameter", "status": "Bad Request" }));
}

#[tokio::test]
async fn test_update_book() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/book", base))
        .json(&json!({ "id": 3, "title": "Introduction to Algorithms", "authors": ["Cormen"], "year": 2009 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Introduction to Algorithms");

    let response = client
        .get(format!("{}/book?id=3", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["year"], 2009);

    let response = client
        .put(format!("{}/book", base))
        .json(&json!({ "id": 99, "title": "Ghost" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/book?id=2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/book?id=2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/book?id=2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/book?id=two", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let base = start_server().await;
    let client = Client::new();

    client
        .delete(format!("{}/book?id=4", base))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .post(format!("{}/book", base))
        .json(&json!({ "title": "Replacement", "authors": [], "year": 2024 }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 5);
}
