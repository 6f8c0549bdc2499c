use contracts::domain::a004_news_category::{NewsCategory, NewsCategoryDto};

use crate::shared::api::{self, ApiError, CreatedResponse};

pub async fn fetch_categories() -> Result<Vec<NewsCategory>, ApiError> {
    api::get_json("/api/news-categories").await
}

pub async fn save_category(dto: &NewsCategoryDto) -> Result<String, ApiError> {
    match &dto.id {
        Some(id) => {
            api::put_json(&format!("/api/news-categories/{}", id), dto).await?;
            Ok(id.clone())
        }
        None => {
            let created: CreatedResponse = api::post_json("/api/news-categories", dto).await?;
            Ok(created.id)
        }
    }
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/news-categories/{}", id)).await
}
