use tonic::Status;

use crate::identity::errors::AuthError;

pub mod is_admin;
pub mod is_user_exists;
pub mod login;
pub mod register;

/// Map a domain error kind to a gRPC status.
///
/// Upstream detail is logged by the service and replaced here with a fixed
/// message.
impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::invalid_argument("invalid email or password"),
            AuthError::InvalidAppId => Status::invalid_argument("invalid app_id"),
            AuthError::UserExists => Status::already_exists("user already exists"),
            AuthError::UserNotFound => Status::not_found("user not found"),
            AuthError::Upstream(_) => Status::internal("internal error"),
        }
    }
}
