pub mod authenticate;
pub mod create_user;
pub mod get_user_profile;
pub mod user_profile;
