use serde::{Deserialize, Serialize};

/// Статус публикации новости
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NewsStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl NewsStatus {
    pub fn code(&self) -> &'static str {
        match self {
            NewsStatus::Draft => "draft",
            NewsStatus::Published => "published",
            NewsStatus::Archived => "archived",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NewsStatus::Draft => "Черновик",
            NewsStatus::Published => "Опубликована",
            NewsStatus::Archived => "В архиве",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            NewsStatus::Draft => "neutral",
            NewsStatus::Published => "success",
            NewsStatus::Archived => "warning",
        }
    }

    pub fn all() -> Vec<NewsStatus> {
        vec![NewsStatus::Draft, NewsStatus::Published, NewsStatus::Archived]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
