use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use usergate_core::UserId;

#[derive(Clone)]
pub struct SessionConfig {
    pub jwt_secret: Secret<String>,
    pub access_token_ttl_in_seconds: i64,
    pub refresh_token_ttl_in_seconds: i64,
    pub refresh_cookie_name: String,
}

impl SessionConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Which half of a session a token belongs to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub typ: TokenKind,
    pub iat: usize,
    pub exp: usize,
}

/// Tokens minted for one successful authentication.
#[derive(Debug)]
pub struct IssuedSession {
    pub access_token: String,
    pub refresh_cookie: Option<Cookie<'static>>,
}

/// Turns a verified identity into signed, self-contained session tokens.
///
/// There is no server-side session state: a token stays valid until its
/// signature or expiry check fails.
#[derive(Clone)]
pub struct SessionIssuer {
    config: SessionConfig,
}

impl SessionIssuer {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn issue_access_token(&self, user_id: &UserId) -> Result<String, TokenAuthError> {
        generate_token(
            user_id,
            TokenKind::Access,
            self.config.access_token_ttl_in_seconds,
            self.config.as_bytes(),
        )
    }

    pub fn issue_refresh_cookie(
        &self,
        user_id: &UserId,
    ) -> Result<Cookie<'static>, TokenAuthError> {
        let token = generate_token(
            user_id,
            TokenKind::Refresh,
            self.config.refresh_token_ttl_in_seconds,
            self.config.as_bytes(),
        )?;
        Ok(create_refresh_cookie(
            token,
            self.config.refresh_cookie_name.clone(),
        ))
    }

    #[tracing::instrument(name = "Issuing session tokens", skip(self))]
    pub fn issue_session(
        &self,
        user_id: &UserId,
        with_refresh: bool,
    ) -> Result<IssuedSession, TokenAuthError> {
        let access_token = self.issue_access_token(user_id)?;
        let refresh_cookie = if with_refresh {
            Some(self.issue_refresh_cookie(user_id)?)
        } else {
            None
        };

        Ok(IssuedSession {
            access_token,
            refresh_cookie,
        })
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenAuthError> {
        validate_token(token, self.config.as_bytes())
    }

    /// Resolve the user id carried by a bearer access token.
    ///
    /// Refresh tokens are rejected here.
    pub fn authenticate_bearer(&self, headers: &HeaderMap) -> Result<UserId, TokenAuthError> {
        let token = extract_bearer_token(headers)?;
        let claims = self.validate_token(token)?;
        if claims.typ != TokenKind::Access {
            return Err(TokenAuthError::InvalidToken);
        }
        UserId::parse(&claims.sub).map_err(|_| TokenAuthError::InvalidToken)
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, TokenAuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(TokenAuthError::MissingToken)?
        .to_str()
        .map_err(|_| TokenAuthError::InvalidToken)?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim())
        }
        _ => Err(TokenAuthError::InvalidToken),
    }
}

// Create cookie and set the value to the passed-in token string
pub fn create_refresh_cookie(token: String, cookie_name: String) -> Cookie<'static> {
    Cookie::build((cookie_name, token))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(true)
        .same_site(SameSite::Strict)
        .build()
}

// Create JWT token for the given user
pub fn generate_token(
    user_id: &UserId,
    kind: TokenKind,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create token duration".to_string()),
    )?;

    let now = Utc::now();
    let exp = now
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        typ: kind,
        iat: to_usize(now.timestamp())?,
        exp: to_usize(exp)?,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(TokenAuthError::TokenError)
}

// Check if JWT token is valid by decoding it using the JWT secret
pub fn validate_token(token: &str, secret: &[u8]) -> Result<Claims, TokenAuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)
}

fn to_usize(timestamp: i64) -> Result<usize, TokenAuthError> {
    timestamp
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))
}
