use reqwest::{Client, Response};
use secrecy::Secret;
use serde::Serialize;
use usergate_adapters::{
    auth::{SessionConfig, SessionIssuer},
    config::{
        AllowedOrigins, Environment,
        constants::{defaults, test},
    },
    hashing::Argon2PasswordHasher,
    persistence::HashMapUserStore,
};
use usergate_service::UserService;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub session_issuer: SessionIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        let session_issuer = SessionIssuer::new(SessionConfig {
            jwt_secret: Secret::from(test::JWT_SECRET.to_owned()),
            access_token_ttl_in_seconds: defaults::ACCESS_TOKEN_TTL_IN_SECONDS,
            refresh_token_ttl_in_seconds: defaults::REFRESH_TOKEN_TTL_IN_SECONDS,
            refresh_cookie_name: defaults::REFRESH_COOKIE_NAME.to_owned(),
        });

        let service = UserService::new(
            HashMapUserStore::default(),
            Argon2PasswordHasher::new(),
            session_issuer.clone(),
            Environment::Development,
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let router = service.as_nested_router(AllowedOrigins::default());

        // Run the server in a separate async task to avoid blocking the main test thread.
        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Failed to run test server")
        });

        let http_client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
            session_issuer,
        }
    }

    pub async fn post_users<Body: Serialize>(&self, body: &Body) -> Response {
        self.http_client
            .post(format!("{}/users", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_session<Body: Serialize>(&self, body: &Body) -> Response {
        self.http_client
            .post(format!("{}/session", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_refresh_token<Body: Serialize>(&self, body: &Body) -> Response {
        self.http_client
            .post(format!("{}/refresh-token", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_me(&self, token: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}/me", &self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register a user and return the id from the response body.
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post_users(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.unwrap();
        body["id"].as_str().unwrap().to_owned()
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", uuid::Uuid::new_v4())
}
