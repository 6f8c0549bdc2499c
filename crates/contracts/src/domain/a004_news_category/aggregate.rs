use serde::{Deserialize, Serialize};

use crate::shared::text::{contains_ci, is_valid_slug};

/// Рубрика новостей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewsCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

impl NewsCategory {
    pub fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || contains_ci(&self.slug, query)
    }
}

/// DTO для создания/обновления рубрики
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsCategoryDto {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

impl Default for NewsCategoryDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            description: None,
            sort_order: 0,
            is_active: true,
        }
    }
}

impl From<NewsCategory> for NewsCategoryDto {
    fn from(c: NewsCategory) -> Self {
        Self {
            id: Some(c.id),
            name: c.name,
            slug: c.slug,
            description: c.description,
            sort_order: c.sort_order,
            is_active: c.is_active,
        }
    }
}

impl NewsCategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название рубрики обязательно".into());
        }
        if !is_valid_slug(&self.slug) {
            return Err("Slug может содержать только латиницу, цифры и дефисы".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut dto = NewsCategoryDto {
            name: "Турниры".into(),
            slug: "tournaments".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.slug = "Турниры".into();
        assert!(dto.validate().is_err());
        dto.slug = "tournaments".into();
        dto.name = " ".into();
        assert!(dto.validate().is_err());
    }
}
