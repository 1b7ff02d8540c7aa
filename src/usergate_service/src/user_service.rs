use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use usergate_adapters::{
    auth::SessionIssuer,
    config::{AllowedOrigins, Environment},
    http::{
        doc::ApiDoc,
        routes::{create_user, health_check, profile, refresh_token, session},
    },
};
use usergate_core::{PasswordHasher, UserStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error_reporting::report_unexpected_errors;
use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP service exposing user registration and session issuance
pub struct UserService {
    router: Router,
}

impl UserService {
    /// Create a new UserService with the provided store, hasher and token issuer
    ///
    /// # Arguments
    /// * `user_store` - Credential store (must be Clone)
    /// * `password_hasher` - One-way password hasher (must be Clone)
    /// * `session_issuer` - Signs access and refresh tokens
    /// * `environment` - Controls how much of an unexpected error gets logged
    ///
    /// Each route is given only the state it needs.
    pub fn new<U, H>(
        user_store: U,
        password_hasher: H,
        session_issuer: SessionIssuer,
        environment: Environment,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let router = Router::new()
            .route("/users", post(create_user::<U, H>))
            .with_state((user_store.clone(), password_hasher.clone()))
            .route("/session", post(session::<U, H>))
            .with_state((
                user_store.clone(),
                password_hasher.clone(),
                session_issuer.clone(),
            ))
            .route("/refresh-token", post(refresh_token::<U, H>))
            .with_state((user_store.clone(), password_hasher, session_issuer.clone()))
            .route("/me", get(profile::<U>))
            .with_state((user_store, session_issuer))
            .route("/health", get(health_check))
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(middleware::from_fn_with_state(
                environment,
                report_unexpected_errors,
            ));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the UserService into a router that can be nested in another application
    ///
    /// An empty `allowed_origins` list accepts any origin.
    pub fn as_nested_router(mut self, allowed_origins: AllowedOrigins) -> Router {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _request_parts: &request::Parts| {
                    allowed_origins.contains(origin)
                },
            ));

        self.router = self.router.layer(cors);
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server until Ctrl+C
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: AllowedOrigins,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("User service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Resolves on Ctrl+C, or on SIGTERM where the platform has it.
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
