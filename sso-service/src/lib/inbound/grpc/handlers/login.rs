use thiserror::Error;
use tonic::Status;

use crate::domain::identity::models::AppId;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::ports::AuthServicePort;
use crate::identity::errors::AppIdError;
use crate::identity::errors::AuthError;
use crate::identity::errors::EmailError;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let token = service.login(try_into_command(request)?).await?;
    Ok(LoginResponse { token })
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("password is required")]
    PasswordMissing,

    #[error(transparent)]
    AppId(#[from] AppIdError),
}

fn try_into_command(request: LoginRequest) -> Result<LoginCommand, ParseLoginRequestError> {
    let email = EmailAddress::new(request.email)?;
    if request.password.is_empty() {
        return Err(ParseLoginRequestError::PasswordMissing);
    }
    let app_id = AppId::new(request.app_id)?;

    Ok(LoginCommand {
        email,
        password: request.password,
        app_id,
    })
}

impl From<ParseLoginRequestError> for Status {
    fn from(err: ParseLoginRequestError) -> Self {
        match err {
            ParseLoginRequestError::AppId(e) => AuthError::from(e).into(),
            err => Status::invalid_argument(err.to_string()),
        }
    }
}
