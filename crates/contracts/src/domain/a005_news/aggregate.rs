use serde::{Deserialize, Serialize};

use crate::enums::NewsStatus;
use crate::shared::text::{is_valid_slug, slugify};

/// Новость / статья
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct News {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub status: NewsStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub venue_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl News {
    /// Дата для отображения: публикации, иначе создания
    pub fn display_date(&self) -> &str {
        self.published_at.as_deref().unwrap_or(&self.created_at)
    }

    pub fn is_published(&self) -> bool {
        self.status == NewsStatus::Published
    }
}

/// DTO для создания/обновления новости
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewsDto {
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: String,
    pub category_id: Option<String>,
    pub cover_image: Option<String>,
    pub status: NewsStatus,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub venue_id: Option<String>,
}

impl From<News> for NewsDto {
    fn from(n: News) -> Self {
        Self {
            id: Some(n.id),
            title: n.title,
            slug: n.slug,
            summary: n.summary,
            content: n.content,
            category_id: n.category_id,
            cover_image: n.cover_image,
            status: n.status,
            is_featured: n.is_featured,
            tags: n.tags,
            venue_id: n.venue_id,
        }
    }
}

impl NewsDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Заполняет slug из заголовка, если пользователь не правил его вручную
    pub fn sync_slug(&mut self, slug_touched: bool) {
        if !slug_touched {
            self.slug = slugify(&self.title);
        }
    }

    /// Теги из строки через запятую, без пустых и дублей
    pub fn set_tags_from_str(&mut self, raw: &str) {
        let mut tags: Vec<String> = Vec::new();
        for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                tags.push(tag.to_string());
            }
        }
        self.tags = tags;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Заголовок обязателен".into());
        }
        if self.title.chars().count() > 200 {
            return Err("Заголовок не должен превышать 200 символов".into());
        }
        if !is_valid_slug(&self.slug) {
            return Err("Slug может содержать только латиницу, цифры и дефисы".into());
        }
        if self.status == NewsStatus::Published && self.content.trim().is_empty() {
            return Err("Нельзя опубликовать новость без текста".into());
        }
        Ok(())
    }
}

/// Частичное обновление (PATCH) для быстрых переключателей в списке
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NewsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_slug_until_touched() {
        let mut dto = NewsDto {
            title: "Летний турнир 2025".into(),
            ..Default::default()
        };
        dto.sync_slug(false);
        assert_eq!(dto.slug, "letnii-turnir-2025");

        dto.slug = "custom".into();
        dto.title = "Другое".into();
        dto.sync_slug(true);
        assert_eq!(dto.slug, "custom");
    }

    #[test]
    fn test_publish_requires_content() {
        let mut dto = NewsDto {
            title: "Title".into(),
            slug: "title".into(),
            status: NewsStatus::Published,
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.content = "Body".into();
        assert!(dto.validate().is_ok());
        dto.status = NewsStatus::Draft;
        dto.content.clear();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_tags_are_trimmed_and_deduplicated() {
        let mut dto = NewsDto::default();
        dto.set_tags_from_str(" tennis, Cup ,, tennis,cup, open ");
        assert_eq!(dto.tags, vec!["tennis", "Cup", "open"]);
    }

    #[test]
    fn test_patch_skips_empty_fields() {
        let patch = NewsPatch {
            is_featured: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"is_featured":true}"#);
    }
}
