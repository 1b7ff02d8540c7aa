pub mod create_user;
pub mod error;
pub mod health;
pub mod profile;
pub mod refresh_token;
pub mod session;

pub use create_user::{CreateUserRequest, CreateUserResponse, create_user};
pub use error::{ApiError, ErrorResponse, UnexpectedErrorCause};
pub use health::health_check;
pub use profile::{UserResponse, profile};
pub use refresh_token::refresh_token;
pub use session::{SessionRequest, SessionResponse, session};
