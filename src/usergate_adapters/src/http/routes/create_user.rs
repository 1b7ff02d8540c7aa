use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use usergate_application::CreateUserUseCase;
use usergate_core::{Email, Password, PasswordHasher, UserId, UserStore};
use utoipa::ToSchema;

use super::error::{ApiError, ErrorResponse};

#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(value_type = String, example = "ana@example.com")]
    pub email: Secret<String>,
    #[schema(value_type = String, format = Password, min_length = 8)]
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Invalid or malformed input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let Json(request) = request?;

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = CreateUserUseCase::new(user_store, password_hasher);
    let output = use_case.execute(request.name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse { id: output.id }),
    ))
}
