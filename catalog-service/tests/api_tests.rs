mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use catalog_service::book::models::BookId;
use catalog_service::user::models::UserId;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_healthcheck() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/healthcheck")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/users")
        .json(&json!({
            "name": "John Doe",
            "username": "john.doe",
            "password": "JohnDoe123*"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["username"], "john.doe");
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register("John Doe", "john.doe", "JohnDoe123*").await;

    let response = app
        .post("/users")
        .json(&json!({
            "name": "Another John",
            "username": "john.doe",
            "password": "Other123*"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Username already exists" }));
}

#[tokio::test]
async fn test_create_user_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/users")
        .json(&json!({
            "name": "John Doe",
            "username": "jd",
            "password": "JohnDoe123*"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_authenticate_success() {
    let app = TestApp::spawn().await;
    let user_id = app.register("John Doe", "john.doe", "JohnDoe123*").await;

    let response = app
        .post("/users/authenticate")
        .json(&json!({ "username": "john.doe", "password": "JohnDoe123*" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let header = response
        .headers()
        .get(AUTHORIZATION)
        .expect("Missing authorization header")
        .to_str()
        .unwrap()
        .to_string();

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("Missing token");
    assert!(!token.is_empty());
    assert_eq!(header, token);

    // The token is accepted on the route scoped to its own subject
    let book_id = app.create_book(token).await;
    let response = app
        .post_authenticated(&format!("/users/{}/books/{}", user_id, book_id), token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("John Doe", "john.doe", "JohnDoe123*").await;

    let response = app
        .post("/users/authenticate")
        .json(&json!({ "username": "john.doe", "password": "JohnDoe123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(AUTHORIZATION).is_none());
    let body = response.text().await.expect("Failed to read response");
    assert_eq!(body, r#"{"message":"Username or password not correct"}"#);
}

#[tokio::test]
async fn test_authenticate_unknown_user_matches_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("John Doe", "john.doe", "JohnDoe123*").await;

    let wrong_password = app
        .post("/users/authenticate")
        .json(&json!({ "username": "john.doe", "password": "nope" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_user = app
        .post("/users/authenticate")
        .json(&json!({ "username": "jane.doe", "password": "JohnDoe123*" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), unknown_user.status());
    assert_eq!(
        wrong_password.text().await.unwrap(),
        unknown_user.text().await.unwrap()
    );
}

#[tokio::test]
async fn test_create_book_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/books")
        .json(&json!({
            "isbn": "978-0-547-92822-7",
            "name": "The Hobbit",
            "author": "J. R. R. Tolkien"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.expect("Failed to read response");
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);
}

#[tokio::test]
async fn test_create_book_with_token_echoes_authorization() {
    let app = TestApp::spawn().await;
    app.register("John Doe", "john.doe", "JohnDoe123*").await;
    let token = app.login("john.doe", "JohnDoe123*").await;

    let response = app
        .post_authenticated("/books", &token)
        .json(&json!({
            "isbn": "978-0-547-92822-7",
            "name": "The Hobbit",
            "author": "J. R. R. Tolkien"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[AUTHORIZATION], token.as_str());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isbn"], "978-0-547-92822-7");
    assert_eq!(body["name"], "The Hobbit");
    assert_eq!(body["author"], "J. R. R. Tolkien");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_raw_token_without_bearer_prefix_is_accepted() {
    let app = TestApp::spawn().await;
    app.register("John Doe", "john.doe", "JohnDoe123*").await;
    let token = app.login("john.doe", "JohnDoe123*").await;

    let response = app
        .post("/books")
        .header(AUTHORIZATION, &token)
        .json(&json!({
            "isbn": "0-306-40615-2",
            "name": "Some Book",
            "author": "Some Author"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .post_authenticated("/books", "not.a.token")
        .json(&json!({
            "isbn": "0-306-40615-2",
            "name": "Some Book",
            "author": "Some Author"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.expect("Failed to read response");
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    let user_id = app.register("John Doe", "john.doe", "JohnDoe123*").await;

    let expired = app
        .issuer
        .issue_at(&user_id, Utc::now() - Duration::hours(2))
        .expect("Failed to issue token");

    let response = app
        .post_authenticated("/books", &expired.token)
        .json(&json!({
            "isbn": "0-306-40615-2",
            "name": "Some Book",
            "author": "Some Author"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_attach_book_for_another_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register("John Doe", "john.doe", "JohnDoe123*").await;
    let jane_id = app.register("Jane Doe", "jane.doe", "JaneDoe123*").await;
    let token = app.login("john.doe", "JohnDoe123*").await;
    let book_id = app.create_book(&token).await;

    let response = app
        .post_authenticated(&format!("/users/{}/books/{}", jane_id, book_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.expect("Failed to read response");
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);

    let jane_id = UserId::from_string(&jane_id).unwrap();
    let book_id = BookId::from_string(&book_id).unwrap();
    assert!(!app.store.has_relation(&jane_id, &book_id));
}

#[tokio::test]
async fn test_attach_book_without_token() {
    let app = TestApp::spawn().await;
    let user_id = app.register("John Doe", "john.doe", "JohnDoe123*").await;

    let response = app
        .post(&format!("/users/{}/books/{}", user_id, uuid_string()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.expect("Failed to read response");
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);
}

#[tokio::test]
async fn test_attach_book_success() {
    let app = TestApp::spawn().await;
    let user_id = app.register("John Doe", "john.doe", "JohnDoe123*").await;
    let token = app.login("john.doe", "JohnDoe123*").await;
    let book_id = app.create_book(&token).await;

    let response = app
        .post_authenticated(&format!("/users/{}/books/{}", user_id, book_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()[AUTHORIZATION], token.as_str());

    let user_id = UserId::from_string(&user_id).unwrap();
    let book_id = BookId::from_string(&book_id).unwrap();
    assert!(app.store.has_relation(&user_id, &book_id));
}

#[tokio::test]
async fn test_attach_book_twice_conflicts() {
    let app = TestApp::spawn().await;
    let user_id = app.register("John Doe", "john.doe", "JohnDoe123*").await;
    let token = app.login("john.doe", "JohnDoe123*").await;
    let book_id = app.create_book(&token).await;
    let path = format!("/users/{}/books/{}", user_id, book_id);

    let first = app
        .post_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app
        .post_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_attach_unknown_book_is_not_found() {
    let app = TestApp::spawn().await;
    let user_id = app.register("John Doe", "john.doe", "JohnDoe123*").await;
    let token = app.login("john.doe", "JohnDoe123*").await;

    let response = app
        .post_authenticated(&format!("/users/{}/books/{}", user_id, uuid_string()), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn uuid_string() -> String {
    BookId::new().to_string()
}
