pub mod auth;
pub mod config;
pub mod hashing;
pub mod http;
pub mod persistence;
