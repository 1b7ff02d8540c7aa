//! # Usergate - User Registration and Session Service
//!
//! This is a facade crate that re-exports all public APIs from the service components.
//! Use this crate to get access to user management and session issuance in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `PasswordHash`, `User`, `UserId`
//! - **Ports**: `UserStore`, `PasswordHasher`
//! - **Use cases**: `CreateUserUseCase`, `AuthenticateUseCase`, `GetUserProfileUseCase`
//! - **Adapters**: `PostgresUserStore`, `HashMapUserStore`, `Argon2PasswordHasher`, `SessionIssuer`
//! - **Service**: `UserService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use usergate_core::*;
}

// Re-export most commonly used core types at the root level
pub use usergate_core::{Email, Password, PasswordHash, User, UserId, ValidationError};

// ============================================================================
// Ports
// ============================================================================

/// Store and hasher trait definitions
pub mod ports {
    pub use usergate_core::{PasswordHasher, PasswordHasherError, UserStore, UserStoreError};
}

pub use ports::{PasswordHasher, PasswordHasherError, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use usergate_application::*;
}

pub use usergate_application::{
    AuthenticateUseCase, CreateUserUseCase, GetUserProfileUseCase, UserProfile,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use usergate_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use usergate_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use usergate_adapters::hashing::*;
    }

    /// JWT session tokens
    pub mod auth {
        pub use usergate_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use usergate_adapters::config::*;
    }
}

pub use usergate_adapters::{
    auth::{SessionConfig, SessionIssuer},
    config::Settings,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, PostgresUserStore},
};

// ============================================================================
// User Service (Main Entry Point)
// ============================================================================

/// Main user service
pub use usergate_service::{UserService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
