pub mod use_cases;

pub use use_cases::{
    authenticate::{AuthenticateError, AuthenticateUseCase},
    create_user::{CreateUserError, CreateUserOutput, CreateUserUseCase},
    get_user_profile::{GetUserProfileError, GetUserProfileUseCase},
    user_profile::UserProfile,
};

#[cfg(test)]
pub(crate) mod test_support;
