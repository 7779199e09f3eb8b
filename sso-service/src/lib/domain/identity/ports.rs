use async_trait::async_trait;

use crate::domain::identity::models::App;
use crate::domain::identity::models::AppId;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::identity::errors::AuthError;
use crate::identity::errors::StoreError;

/// Port for authentication service operations.
///
/// Inputs arrive already shape-validated; implementations only enforce
/// business rules.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a session token for an application.
    ///
    /// # Arguments
    /// * `command` - Email, plaintext password and target application
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Upstream` - Store, application lookup or signing failure
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated registration fields
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Upstream` - Hashing or store failure
    async fn register_new_user(&self, command: RegisterUserCommand) -> Result<UserId, AuthError>;

    /// Check whether a user holds the admin flag.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this id
    /// * `Upstream` - Store failure
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;

    /// Check whether an email is registered.
    ///
    /// Absence is a normal `false`, never an error.
    ///
    /// # Errors
    /// * `Upstream` - Store failure
    async fn is_user_exists(&self, email: &EmailAddress) -> Result<bool, AuthError>;
}

/// Persists new users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Insert a new user record.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `Duplicate` - Email is already registered
    /// * `Timeout` - Deadline expired before the store answered
    /// * `Database` - Any other store failure
    async fn save_user(&self, user: NewUser) -> Result<UserId, StoreError>;
}

/// Reads users and their properties.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Fetch a user by email.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Timeout` / `Database` - Store failure
    async fn user(&self, email: &EmailAddress) -> Result<User, StoreError>;

    /// Fetch the admin flag of a user.
    ///
    /// # Errors
    /// * `NotFound` - No user with this id
    /// * `Timeout` / `Database` - Store failure
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StoreError>;

    /// Report whether an email is registered.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Timeout` / `Database` - Store failure
    async fn is_exists(&self, email: &EmailAddress) -> Result<bool, StoreError>;
}

/// Reads registered applications.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Fetch an application by id.
    ///
    /// # Errors
    /// * `NotFound` - No application with this id
    /// * `Timeout` / `Database` - Store failure
    async fn app(&self, app_id: AppId) -> Result<App, StoreError>;
}
