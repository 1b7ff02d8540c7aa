use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use usergate_application::{AuthenticateError, CreateUserError, GetUserProfileError};
use usergate_core::{PasswordHasherError, UserStoreError, ValidationError};

use crate::auth::TokenAuthError;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error.";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid credentials")]
    pub error: String,
    /// Offending input field, set for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "password")]
    pub field: Option<String>,
}

/// Cause of a 500 response. Attached to the response extensions so the
/// service can decide how much of it to log.
#[derive(Debug, Clone)]
pub struct UnexpectedErrorCause(pub String);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already exists with this e-mail")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidInput(_) | ApiError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            ApiError::EmailAlreadyExists => StatusCode::CONFLICT,
            ApiError::MissingToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let (body, cause) = match self {
            ApiError::Validation(ref error) => (
                ErrorResponse {
                    error: error.to_string(),
                    field: Some(error.field().to_owned()),
                },
                None,
            ),
            ApiError::Unexpected(cause) => (
                ErrorResponse {
                    error: INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                    field: None,
                },
                Some(UnexpectedErrorCause(cause)),
            ),
            other => (
                ErrorResponse {
                    error: other.to_string(),
                    field: None,
                },
                None,
            ),
        };

        let mut response = (status_code, Json(body)).into_response();
        if let Some(cause) = cause {
            response.extensions_mut().insert(cause);
        }
        response
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        ApiError::Unexpected(error.to_string())
    }
}

impl From<PasswordHasherError> for ApiError {
    fn from(error: PasswordHasherError) -> Self {
        ApiError::Unexpected(error.to_string())
    }
}

impl From<TokenAuthError> for ApiError {
    fn from(error: TokenAuthError) -> Self {
        match error {
            TokenAuthError::MissingToken => ApiError::MissingToken,
            TokenAuthError::InvalidToken | TokenAuthError::TokenError(_) => ApiError::InvalidToken,
            TokenAuthError::UnexpectedError(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<CreateUserError> for ApiError {
    fn from(error: CreateUserError) -> Self {
        match error {
            CreateUserError::AlreadyExistsEmail => ApiError::EmailAlreadyExists,
            CreateUserError::ValidationError(e) => e.into(),
            CreateUserError::PasswordHasherError(e) => e.into(),
            CreateUserError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<AuthenticateError> for ApiError {
    fn from(error: AuthenticateError) -> Self {
        match error {
            AuthenticateError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthenticateError::PasswordHasherError(e) => e.into(),
            AuthenticateError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<GetUserProfileError> for ApiError {
    fn from(error: GetUserProfileError) -> Self {
        match error {
            GetUserProfileError::UserNotFound => ApiError::UserNotFound,
            GetUserProfileError::UserStoreError(e) => e.into(),
        }
    }
}
