use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use usergate_core::{PasswordHasher, UserStore};

use crate::auth::SessionIssuer;

use super::error::{ApiError, ErrorResponse};
use super::profile::UserResponse;
use super::session::{SessionRequest, SessionResponse, authenticate};

// TODO: accept the `refreshToken` cookie as the credential instead of
// re-checking email and password, once refresh tokens can be revoked.
/// Login that also sets the long-lived refresh token cookie.
#[utoipa::path(
    post,
    path = "/refresh-token",
    request_body = SessionRequest,
    responses(
        (
            status = 200,
            description = "Authenticated, refresh token cookie set",
            body = SessionResponse,
            headers(
                ("Set-Cookie" = String, description = "refreshToken; HttpOnly; Secure; SameSite=Strict; Path=/")
            )
        ),
        (status = 400, description = "Invalid credentials or malformed input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["session"],
    operation_id = "refreshToken"
)]
#[tracing::instrument(name = "Refresh token", skip_all)]
pub async fn refresh_token<U, H>(
    State((user_store, password_hasher, session_issuer)): State<(U, H, SessionIssuer)>,
    jar: CookieJar,
    request: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let Json(request) = request?;

    let profile = authenticate(user_store, password_hasher, request).await?;
    let issued = session_issuer.issue_session(&profile.id, true)?;

    let jar = match issued.refresh_cookie {
        Some(cookie) => jar.add(cookie),
        None => jar,
    };

    Ok((
        jar,
        Json(SessionResponse {
            token: issued.access_token,
            user: UserResponse::from(&profile),
        }),
    ))
}
