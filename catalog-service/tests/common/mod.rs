use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::SigningSecret;
use auth::TokenIssuer;
use catalog_service::book::errors::BookError;
use catalog_service::book::models::Book;
use catalog_service::book::models::BookId;
use catalog_service::book::ports::BookRepository;
use catalog_service::domain::authentication::service::AuthService;
use catalog_service::domain::book::service::BookService;
use catalog_service::domain::user::service::UserService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::user::errors::UserError;
use catalog_service::user::models::User;
use catalog_service::user::models::UserId;
use catalog_service::user::models::Username;
use catalog_service::user::ports::UserRepository;
use serde_json::json;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory stand-in for PostgreSQL, enforcing the same constraints as
/// the schema: unique usernames, relation keys and foreign keys.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<String, User>>,
    books: Mutex<HashMap<BookId, Book>>,
    relations: Mutex<HashSet<(UserId, BookId)>>,
}

impl InMemoryStore {
    pub fn has_relation(&self, user_id: &UserId, book_id: &BookId) -> bool {
        self.relations
            .lock()
            .unwrap()
            .contains(&(*user_id, *book_id))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let key = user.username.as_str().to_string();
        if users.contains_key(&key) {
            return Err(UserError::UsernameAlreadyExists(key));
        }
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(username.as_str()).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        Ok(self.users.lock().unwrap().contains_key(username.as_str()))
    }

    async fn attach_book(&self, user_id: &UserId, book_id: &BookId) -> Result<(), UserError> {
        if !self.users.lock().unwrap().values().any(|u| u.id == *user_id) {
            return Err(UserError::NotFound(user_id.to_string()));
        }
        if !self.books.lock().unwrap().contains_key(book_id) {
            return Err(UserError::BookNotFound(book_id.to_string()));
        }
        if !self.relations.lock().unwrap().insert((*user_id, *book_id)) {
            return Err(UserError::BookAlreadyAttached {
                user_id: user_id.to_string(),
                book_id: book_id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for InMemoryStore {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        self.books.lock().unwrap().insert(book.id, book.clone());
        Ok(book)
    }
}

/// Test application that spawns the real router on a random port
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub api_client: reqwest::Client,
    pub issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let secret = SigningSecret::new(TEST_SECRET).expect("Invalid test secret");
        let authenticator = Arc::new(Authenticator::new(&secret));
        let store = Arc::new(InMemoryStore::default());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&store),
            Arc::clone(&authenticator),
        ));
        let book_service = Arc::new(BookService::new(Arc::clone(&store)));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&store),
            Arc::clone(&authenticator),
        ));

        let router = create_router(user_service, book_service, auth_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            api_client: reqwest::Client::new(),
            issuer: TokenIssuer::new(&secret),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return its id.
    pub async fn register(&self, name: &str, username: &str, password: &str) -> String {
        let response = self
            .post("/users")
            .json(&json!({
                "name": name,
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().unwrap().to_string()
    }

    /// Log in and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/users/authenticate")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().unwrap().to_string()
    }

    /// Register a book with a valid token and return its id.
    pub async fn create_book(&self, token: &str) -> String {
        let response = self
            .post_authenticated("/books", token)
            .json(&json!({
                "isbn": "978-0-547-92822-7",
                "name": "The Hobbit",
                "author": "J. R. R. Tolkien"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().unwrap().to_string()
    }
}
