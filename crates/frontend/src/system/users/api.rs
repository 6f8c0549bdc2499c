use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api::{self, ApiError, CreatedResponse};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    api::get_json("/api/users").await
}

/// Create new user, returns its id
pub async fn create_user(dto: &CreateUserDto) -> Result<String, ApiError> {
    let created: CreatedResponse = api::post_json("/api/users", dto).await?;
    Ok(created.id)
}

pub async fn update_user(dto: &UpdateUserDto) -> Result<(), ApiError> {
    api::put_json(&format!("/api/users/{}", dto.id), dto).await
}

pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/users/{}", id)).await
}
