pub mod session_tokens;

pub use session_tokens::{
    Claims, IssuedSession, SessionConfig, SessionIssuer, TokenAuthError, TokenKind,
    create_refresh_cookie, extract_bearer_token, generate_token, validate_token,
};
