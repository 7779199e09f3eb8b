use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// A session token is scoped to one user and one calling application.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// User identifier
    pub uid: i64,

    /// User email at issue time
    pub email: String,

    /// Application the token was issued for
    pub app_id: i32,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims issued at `issued_at` and valid for `ttl`.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email address
    /// * `app_id` - Application identifier
    /// * `issued_at` - Issue instant
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with iat and exp set
    pub fn new(
        uid: i64,
        email: impl Into<String>,
        app_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expiration = issued_at + ttl;

        Self {
            uid,
            email: email.into(),
            app_id,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Token lifetime in seconds.
    pub fn lifetime_seconds(&self) -> i64 {
        self.exp - self.iat
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
