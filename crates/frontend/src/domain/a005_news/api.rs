use contracts::domain::a005_news::{News, NewsDto, NewsPatch};

use crate::shared::api::{self, ApiError, CreatedResponse};

pub async fn fetch_news() -> Result<Vec<News>, ApiError> {
    api::get_json("/api/news").await
}

pub async fn fetch_news_item(id: &str) -> Result<News, ApiError> {
    api::get_json(&format!("/api/news/{}", id)).await
}

/// Опубликованные новости площадки (публичная страница)
pub async fn fetch_venue_news(venue_id: &str) -> Result<Vec<News>, ApiError> {
    api::get_json(&format!(
        "/api/news?venue_id={}&status=published",
        urlencoding::encode(venue_id)
    ))
    .await
}

pub async fn save_news(dto: &NewsDto) -> Result<String, ApiError> {
    match &dto.id {
        Some(id) => {
            api::put_json(&format!("/api/news/{}", id), dto).await?;
            Ok(id.clone())
        }
        None => {
            let created: CreatedResponse = api::post_json("/api/news", dto).await?;
            Ok(created.id)
        }
    }
}

/// Частичное обновление: статус и/или флаг «главная»
pub async fn patch_news(id: &str, patch: &NewsPatch) -> Result<(), ApiError> {
    api::patch_json(&format!("/api/news/{}", id), patch).await
}

pub async fn delete_news(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/news/{}", id)).await
}
