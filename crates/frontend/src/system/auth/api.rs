use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api::{post_json, ApiError};

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post_json("/api/auth/login", request).await
}
