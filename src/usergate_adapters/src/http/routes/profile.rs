use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use usergate_application::{GetUserProfileUseCase, UserProfile};
use usergate_core::{UserId, UserStore};
use utoipa::ToSchema;

use crate::auth::SessionIssuer;

use super::error::{ApiError, ErrorResponse};

/// Public user representation. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

impl From<&UserProfile> for UserResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            email: profile.email.as_ref().expose_secret().to_owned(),
        }
    }
}

/// Profile of the user owning the bearer token.
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tags = ["users"],
    operation_id = "getProfile"
)]
#[tracing::instrument(name = "Profile", skip_all)]
pub async fn profile<U>(
    State((user_store, session_issuer)): State<(U, SessionIssuer)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let user_id = session_issuer.authenticate_bearer(&headers)?;

    let use_case = GetUserProfileUseCase::new(user_store);
    let profile = use_case.execute(user_id).await?;

    Ok(Json(UserResponse::from(&profile)))
}
