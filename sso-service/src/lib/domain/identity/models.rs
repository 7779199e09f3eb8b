use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use chrono::Utc;

use crate::identity::errors::AppIdError;
use crate::identity::errors::DateOfBirthError;
use crate::identity::errors::EmailError;
use crate::identity::errors::PasswordPolicyError;
use crate::identity::errors::SexError;
use crate::identity::errors::UserIdError;
use crate::identity::errors::UsernameError;

/// Registered user as stored in the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub username: Username,
    pub sex: Sex,
    pub location: String,
    pub date_of_birth: DateOfBirth,
}

/// User record ready to be persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
    pub username: Username,
    pub sex: Sex,
    pub location: String,
    pub date_of_birth: DateOfBirth,
}

/// Registered calling application.
#[derive(Clone, PartialEq, Eq)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: Vec<u8>,
}

// The signing secret never reaches logs.
impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// User unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID received from a caller.
    ///
    /// # Errors
    /// * `NotPositive` - Zero or negative id
    pub fn new(id: i64) -> Result<Self, UserIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(UserIdError::NotPositive(id))
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Application unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl AppId {
    /// Parse an application ID received from a caller.
    ///
    /// # Errors
    /// * `NotPositive` - Zero or negative id
    pub fn new(id: i32) -> Result<Self, AppIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(AppIdError::NotPositive(id))
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Missing` - Empty string
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.is_empty() {
            return Err(EmailError::Missing);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Non-empty, shorter than 20 characters, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 19;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Missing` - Empty username
    /// * `TooLong` - 20 characters or more
    /// * `ContainsWhitespace` - Any whitespace character
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length == 0 {
            return Err(UsernameError::Missing);
        }
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if username.chars().any(char::is_whitespace) {
            return Err(UsernameError::ContainsWhitespace);
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Self-declared sex of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sex {
    Male,
    Female,
    Another,
    #[default]
    Undefined,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Another => "Another",
            Sex::Undefined => "undefined",
        }
    }
}

impl FromStr for Sex {
    type Err = SexError;

    /// An empty value is read as `Undefined`; proto3 sends "" for unset strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            "Another" => Ok(Sex::Another),
            "undefined" | "" => Ok(Sex::Undefined),
            other => Err(SexError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar date of birth, `YYYY-MM-DD` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse a date of birth received from a caller.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a `YYYY-MM-DD` calendar date
    /// * `InFuture` - Date after today (UTC)
    pub fn parse(value: &str) -> Result<Self, DateOfBirthError> {
        let date = NaiveDate::parse_from_str(value, Self::FORMAT)
            .map_err(|e| DateOfBirthError::InvalidFormat(e.to_string()))?;

        if date > Utc::now().date_naive() {
            return Err(DateOfBirthError::InFuture);
        }

        Ok(Self(date))
    }

    /// Wrap a date read back from the store.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Plaintext password that satisfies the registration strength policy.
///
/// Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(String);

impl NewPassword {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 128;

    /// Validate a password chosen at registration.
    ///
    /// # Errors
    /// * `Missing` - Empty password
    /// * `TooShort` / `TooLong` - Outside 8..=128 characters
    /// * `TooWeak` - Lacks a lowercase letter, an uppercase letter or a digit
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length == 0 {
            return Err(PasswordPolicyError::Missing);
        }
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let has_lower = password.chars().any(char::is_lowercase);
        let has_upper = password.chars().any(char::is_uppercase);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !(has_lower && has_upper && has_digit) {
            return Err(PasswordPolicyError::TooWeak);
        }

        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewPassword(***)")
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub email: EmailAddress,
    pub password: NewPassword,
    pub username: Username,
    pub sex: Sex,
    pub location: String,
    pub date_of_birth: DateOfBirth,
}

/// Command to log a user into an application.
///
/// The password is only checked for presence: it is compared against the
/// stored hash, not against the registration policy.
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
    pub app_id: AppId,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address() {
        assert!(EmailAddress::new("a@x.com".to_string()).is_ok());
        assert_eq!(
            EmailAddress::new(String::new()).unwrap_err(),
            EmailError::Missing
        );
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_username_rules() {
        assert!(Username::new("alice".to_string()).is_ok());
        assert!(Username::new("a".repeat(19)).is_ok());
        assert_eq!(
            Username::new("a".repeat(20)).unwrap_err(),
            UsernameError::TooLong { max: 19, actual: 20 }
        );
        assert_eq!(
            Username::new("alice smith".to_string()).unwrap_err(),
            UsernameError::ContainsWhitespace
        );
        assert_eq!(
            Username::new(String::new()).unwrap_err(),
            UsernameError::Missing
        );
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("Female".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("undefined".parse::<Sex>(), Ok(Sex::Undefined));
        assert_eq!("".parse::<Sex>(), Ok(Sex::Undefined));
        assert!("female".parse::<Sex>().is_err());
        assert_eq!(Sex::Another.to_string(), "Another");
    }

    #[test]
    fn test_date_of_birth() {
        let dob = DateOfBirth::parse("1990-01-01").unwrap();
        assert_eq!(dob.to_string(), "1990-01-01");

        assert!(matches!(
            DateOfBirth::parse("01/01/1990"),
            Err(DateOfBirthError::InvalidFormat(_))
        ));
        assert!(matches!(
            DateOfBirth::parse("1990-02-30"),
            Err(DateOfBirthError::InvalidFormat(_))
        ));
        assert_eq!(
            DateOfBirth::parse("9999-01-01").unwrap_err(),
            DateOfBirthError::InFuture
        );
    }

    #[test]
    fn test_password_policy() {
        assert!(NewPassword::new("Str0ng!Pass".to_string()).is_ok());
        assert_eq!(
            NewPassword::new(String::new()).unwrap_err(),
            PasswordPolicyError::Missing
        );
        assert_eq!(
            NewPassword::new("Ab1".to_string()).unwrap_err(),
            PasswordPolicyError::TooShort { min: 8 }
        );
        assert_eq!(
            NewPassword::new("alllowercase1".to_string()).unwrap_err(),
            PasswordPolicyError::TooWeak
        );
        assert_eq!(
            NewPassword::new("NoDigitsHere".to_string()).unwrap_err(),
            PasswordPolicyError::TooWeak
        );
    }

    #[test]
    fn test_secrets_redacted_in_debug() {
        let password = NewPassword::new("Str0ng!Pass".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("Str0ng"));

        let app = App {
            id: AppId(1),
            name: "web".to_string(),
            secret: b"top-secret".to_vec(),
        };
        assert!(!format!("{:?}", app).contains("secret: "));
    }

    #[test]
    fn test_ids_must_be_positive() {
        assert_eq!(UserId::new(5), Ok(UserId(5)));
        assert_eq!(UserId::new(0), Err(UserIdError::NotPositive(0)));
        assert_eq!(AppId::new(-1), Err(AppIdError::NotPositive(-1)));
    }
}
