use thiserror::Error;
use tonic::Status;

use crate::domain::identity::models::DateOfBirth;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::NewPassword;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::Sex;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::AuthServicePort;
use crate::identity::errors::DateOfBirthError;
use crate::identity::errors::EmailError;
use crate::identity::errors::PasswordPolicyError;
use crate::identity::errors::SexError;
use crate::identity::errors::UsernameError;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let user_id = service.register_new_user(try_into_command(request)?).await?;
    Ok(RegisterResponse { user_id: user_id.0 })
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Password(#[from] PasswordPolicyError),

    #[error("{0}")]
    Username(#[from] UsernameError),

    #[error("{0}")]
    Sex(#[from] SexError),

    #[error("{0}")]
    DateOfBirth(#[from] DateOfBirthError),
}

fn try_into_command(
    request: RegisterRequest,
) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
    Ok(RegisterUserCommand {
        email: EmailAddress::new(request.email)?,
        password: NewPassword::new(request.password)?,
        username: Username::new(request.username)?,
        sex: request.sex.parse::<Sex>()?,
        location: request.location,
        date_of_birth: DateOfBirth::parse(&request.date_of_birth)?,
    })
}

impl From<ParseRegisterRequestError> for Status {
    fn from(err: ParseRegisterRequestError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}
