pub mod email;
pub mod error;
pub mod password;
pub mod user;
pub mod user_id;
