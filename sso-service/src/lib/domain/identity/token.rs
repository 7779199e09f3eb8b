use auth::JwtError;
use auth::JwtHandler;
use auth::SessionClaims;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::identity::models::App;
use crate::domain::identity::models::User;

/// Issue a session token for `user` on `app`, valid for `ttl` from now.
///
/// The token is signed with the application's own secret.
///
/// # Errors
/// * `EncodingFailed` - Claims serialization or signing failed
pub fn issue(user: &User, app: &App, ttl: Duration) -> Result<String, JwtError> {
    issue_at(user, app, ttl, Utc::now())
}

/// Issue a session token as of `now`. Identical inputs give identical tokens.
pub fn issue_at(
    user: &User,
    app: &App,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, JwtError> {
    let claims = SessionClaims::new(user.id.0, user.email.as_str(), app.id.0, now, ttl);

    JwtHandler::new(&app.secret).encode(&claims)
}
