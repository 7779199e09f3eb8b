use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("user_id must be positive, got {0}")]
    NotPositive(i64),
}

/// Error for AppId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppIdError {
    #[error("app_id must be positive, got {0}")]
    NotPositive(i32),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is required")]
    Missing,

    #[error("incorrect email: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username is required")]
    Missing,

    #[error("username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("username shouldn't contain spaces")]
    ContainsWhitespace,
}

/// Error for Sex parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SexError {
    #[error("sex can be [Female, Male, Another or undefined], got {0:?}")]
    Unknown(String),
}

/// Error for DateOfBirth parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateOfBirthError {
    #[error("date_of_birth must be formatted as YYYY-MM-DD: {0}")]
    InvalidFormat(String),

    #[error("date_of_birth is in the future")]
    InFuture,
}

/// Error for password policy violations at registration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("password is required")]
    Missing,

    #[error("password is too short: minimum {min} characters")]
    TooShort { min: usize },

    #[error("password is too long: maximum {max} characters")]
    TooLong { max: usize },

    #[error("password is too easy: it needs lowercase and uppercase letters and a digit")]
    TooWeak,
}

/// Signals reported by the credential store.
///
/// Each variant is distinguishable so the service can classify it without
/// looking at backend-specific error detail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint violated: {0}")]
    Duplicate(String),

    #[error("store call timed out")]
    Timeout,

    #[error("database error: {0}")]
    Database(String),
}

/// Domain error kinds surfaced by the authentication service.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password so
/// callers cannot probe which accounts exist.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid app_id")]
    InvalidAppId,

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl From<AppIdError> for AuthError {
    fn from(_: AppIdError) -> Self {
        AuthError::InvalidAppId
    }
}
