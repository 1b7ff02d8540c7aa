//! OpenAPI document for the HTTP routes, served by Swagger UI under `/docs`.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::routes::{
    CreateUserRequest, CreateUserResponse, ErrorResponse, SessionRequest, SessionResponse,
    UserResponse,
};

/// Registers the bearer scheme used by `GET /me`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Usergate API",
        description = "User registration and JWT session issuance."
    ),
    paths(
        super::routes::create_user::create_user,
        super::routes::session::session,
        super::routes::refresh_token::refresh_token,
        super::routes::profile::profile,
        super::routes::health::health_check,
    ),
    components(schemas(
        CreateUserRequest,
        CreateUserResponse,
        SessionRequest,
        SessionResponse,
        UserResponse,
        ErrorResponse
    )),
    tags(
        (name = "users", description = "User registration and profile"),
        (name = "session", description = "Access and refresh token issuance"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
