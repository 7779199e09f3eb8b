use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::UserId;
use crate::domain::identity::token;
use crate::identity::errors::AuthError;
use crate::identity::errors::StoreError;
use crate::identity::ports::AppProvider;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::UserProvider;
use crate::identity::ports::UserSaver;

/// Domain service implementation for authentication.
///
/// Holds only immutable configuration; every call is independent.
pub struct AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    app_provider: Arc<AP>,
    password_hasher: auth::PasswordHasher,
    token_ttl: Duration,
}

impl<US, UP, AP> AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - Persists new users
    /// * `user_provider` - Reads users
    /// * `app_provider` - Reads applications
    /// * `token_ttl` - Lifetime of issued session tokens
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        app_provider: Arc<AP>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher: auth::PasswordHasher::new(),
            token_ttl,
        }
    }

    /// Replace the default password hasher (e.g. to tune the Argon2 cost).
    pub fn with_password_hasher(mut self, password_hasher: auth::PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

#[async_trait]
impl<US, UP, AP> AuthServicePort for AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        const OP: &str = "identity.login";

        tracing::info!(op = OP, email = %command.email, app_id = %command.app_id, "attempting to login user");

        let user = match self.user_provider.user(&command.email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                tracing::warn!(op = OP, email = %command.email, "user not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(op = OP, error = %e, "failed to get user");
                return Err(AuthError::Upstream(e.to_string()));
            }
        };

        let password_matches = self
            .password_hasher
            .verify(&command.password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(op = OP, user_id = %user.id, error = %e, "stored password hash is unreadable");
                AuthError::Upstream(e.to_string())
            })?;

        if !password_matches {
            tracing::info!(op = OP, user_id = %user.id, "invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let app = self.app_provider.app(command.app_id).await.map_err(|e| {
            match e {
                StoreError::NotFound => {
                    tracing::warn!(op = OP, app_id = %command.app_id, "app not found")
                }
                _ => tracing::error!(op = OP, app_id = %command.app_id, error = %e, "failed to get app"),
            }
            AuthError::Upstream(e.to_string())
        })?;

        let token = token::issue(&user, &app, self.token_ttl).map_err(|e| {
            tracing::error!(op = OP, user_id = %user.id, app_id = %app.id, error = %e, "failed to create token");
            AuthError::Upstream(e.to_string())
        })?;

        tracing::info!(op = OP, user_id = %user.id, app_id = %app.id, "user logged in successfully");

        Ok(token)
    }

    async fn register_new_user(&self, command: RegisterUserCommand) -> Result<UserId, AuthError> {
        const OP: &str = "identity.register_new_user";

        tracing::info!(op = OP, email = %command.email, "registering user");

        let password_hash = self
            .password_hasher
            .hash(command.password.expose())
            .map_err(|e| {
                tracing::error!(op = OP, error = %e, "failed to generate password hash");
                AuthError::Upstream(e.to_string())
            })?;

        let new_user = NewUser {
            email: command.email,
            password_hash,
            username: command.username,
            sex: command.sex,
            location: command.location,
            date_of_birth: command.date_of_birth,
        };

        let user_id = self
            .user_saver
            .save_user(new_user)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => {
                    tracing::warn!(op = OP, "user already exists");
                    AuthError::UserExists
                }
                _ => {
                    tracing::error!(op = OP, error = %e, "failed to save user");
                    AuthError::Upstream(e.to_string())
                }
            })?;

        tracing::info!(op = OP, user_id = %user_id, "user registered");

        Ok(user_id)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        const OP: &str = "identity.is_admin";

        let is_admin = self
            .user_provider
            .is_admin(user_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => {
                    tracing::warn!(op = OP, user_id = %user_id, "user not found");
                    AuthError::UserNotFound
                }
                _ => {
                    tracing::error!(op = OP, user_id = %user_id, error = %e, "failed to check admin flag");
                    AuthError::Upstream(e.to_string())
                }
            })?;

        tracing::info!(op = OP, user_id = %user_id, is_admin, "checked if user is admin");

        Ok(is_admin)
    }

    async fn is_user_exists(&self, email: &EmailAddress) -> Result<bool, AuthError> {
        const OP: &str = "identity.is_user_exists";

        tracing::info!(op = OP, email = %email, "checking if user exists");

        match self.user_provider.is_exists(email).await {
            Ok(exists) => Ok(exists),
            Err(StoreError::NotFound) => Ok(false),
            Err(e) => {
                tracing::error!(op = OP, email = %email, error = %e, "failed to check user existence");
                Err(AuthError::Upstream(e.to_string()))
            }
        }
    }
}
