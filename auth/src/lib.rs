//! Authentication utilities library
//!
//! Provides the primitives the SSO service builds on:
//! - Password hashing (Argon2id)
//! - Session token claims and HS256 signing
//!
//! Session tokens are signed with the secret of the application they are
//! issued for, so a `JwtHandler` is built per application secret.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{JwtHandler, SessionClaims};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"application-secret");
//! let claims = SessionClaims::new(42, "alice@example.com", 1, Utc::now(), Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: SessionClaims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.uid, 42);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
