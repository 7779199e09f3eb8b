use tonic::Status;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::ports::AuthServicePort;
use crate::proto::IsUserExistsRequest;
use crate::proto::IsUserExistsResponse;

pub async fn is_user_exists<S: AuthServicePort>(
    service: &S,
    request: IsUserExistsRequest,
) -> Result<IsUserExistsResponse, Status> {
    let email =
        EmailAddress::new(request.email).map_err(|e| Status::invalid_argument(e.to_string()))?;

    let exists = service.is_user_exists(&email).await?;
    Ok(IsUserExistsResponse { exists })
}
