use contracts::domain::a002_court::{Court, CourtDto, CourtStatusPatch};
use contracts::enums::CourtStatus;

use crate::shared::api::{self, ApiError, CreatedResponse};

pub async fn fetch_courts() -> Result<Vec<Court>, ApiError> {
    api::get_json("/api/courts").await
}

pub async fn fetch_court(id: &str) -> Result<Court, ApiError> {
    api::get_json(&format!("/api/courts/{}", id)).await
}

/// Корты площадки (публичная страница)
pub async fn fetch_venue_courts(venue_id: &str) -> Result<Vec<Court>, ApiError> {
    api::get_json(&format!("/api/venues/{}/courts", venue_id)).await
}

/// Создание (POST) или обновление (PUT) в зависимости от `dto.id`. Возвращает id корта.
pub async fn save_court(dto: &CourtDto) -> Result<String, ApiError> {
    match &dto.id {
        Some(id) => {
            api::put_json(&format!("/api/courts/{}", id), dto).await?;
            Ok(id.clone())
        }
        None => {
            let created: CreatedResponse = api::post_json("/api/courts", dto).await?;
            Ok(created.id)
        }
    }
}

pub async fn update_status(id: &str, status: CourtStatus) -> Result<(), ApiError> {
    api::patch_json(&format!("/api/courts/{}/status", id), &CourtStatusPatch { status }).await
}

pub async fn delete_court(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/courts/{}", id)).await
}
