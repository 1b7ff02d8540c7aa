use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use usergate_application::{AuthenticateUseCase, UserProfile};
use usergate_core::{Email, PasswordHasher, UserStore};
use utoipa::ToSchema;

use crate::auth::SessionIssuer;

use super::error::{ApiError, ErrorResponse};
use super::profile::UserResponse;

#[derive(Deserialize, ToSchema)]
pub struct SessionRequest {
    #[schema(value_type = String, example = "ana@example.com")]
    pub email: Secret<String>,
    #[schema(value_type = String, format = Password)]
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    /// Short-lived access token for the `Authorization: Bearer` header
    pub token: String,
    pub user: UserResponse,
}

/// Exchange email and password for an access token.
#[utoipa::path(
    post,
    path = "/session",
    request_body = SessionRequest,
    responses(
        (status = 200, description = "Authenticated", body = SessionResponse),
        (status = 400, description = "Invalid credentials or malformed input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["session"],
    operation_id = "createSession"
)]
#[tracing::instrument(name = "Session", skip_all)]
pub async fn session<U, H>(
    State((user_store, password_hasher, session_issuer)): State<(U, H, SessionIssuer)>,
    request: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let Json(request) = request?;

    let profile = authenticate(user_store, password_hasher, request).await?;
    let issued = session_issuer.issue_session(&profile.id, false)?;

    Ok(Json(SessionResponse {
        token: issued.access_token,
        user: UserResponse::from(&profile),
    }))
}

/// Shared by `/session` and `/refresh-token`: both start from email and password.
pub(super) async fn authenticate<U, H>(
    user_store: U,
    password_hasher: H,
    request: SessionRequest,
) -> Result<UserProfile, ApiError>
where
    U: UserStore,
    H: PasswordHasher,
{
    let email = Email::try_from(request.email)?;

    let use_case = AuthenticateUseCase::new(user_store, password_hasher);
    Ok(use_case.execute(email, request.password).await?)
}
