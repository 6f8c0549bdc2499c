use contracts::domain::a003_court_mapping::{CourtMapping, CourtMappingDto};

use crate::shared::api::{self, ApiError, CreatedResponse};

pub async fn fetch_mappings() -> Result<Vec<CourtMapping>, ApiError> {
    api::get_json("/api/court-mappings").await
}

pub async fn fetch_mapping(id: &str) -> Result<CourtMapping, ApiError> {
    api::get_json(&format!("/api/court-mappings/{}", id)).await
}

pub async fn save_mapping(dto: &CourtMappingDto) -> Result<String, ApiError> {
    match &dto.id {
        Some(id) => {
            api::put_json(&format!("/api/court-mappings/{}", id), dto).await?;
            Ok(id.clone())
        }
        None => {
            let created: CreatedResponse = api::post_json("/api/court-mappings", dto).await?;
            Ok(created.id)
        }
    }
}

pub async fn delete_mapping(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/court-mappings/{}", id)).await
}
