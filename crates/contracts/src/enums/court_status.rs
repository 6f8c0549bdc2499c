use serde::{Deserialize, Serialize};

/// Эксплуатационный статус корта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CourtStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl CourtStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CourtStatus::Active => "active",
            CourtStatus::Maintenance => "maintenance",
            CourtStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CourtStatus::Active => "Работает",
            CourtStatus::Maintenance => "Обслуживание",
            CourtStatus::Inactive => "Закрыт",
        }
    }

    /// Вариант бейджа для UI
    pub fn badge_variant(&self) -> &'static str {
        match self {
            CourtStatus::Active => "success",
            CourtStatus::Maintenance => "warning",
            CourtStatus::Inactive => "error",
        }
    }

    /// Можно ли бронировать корт в этом статусе
    pub fn is_bookable(&self) -> bool {
        matches!(self, CourtStatus::Active)
    }

    pub fn all() -> Vec<CourtStatus> {
        vec![
            CourtStatus::Active,
            CourtStatus::Maintenance,
            CourtStatus::Inactive,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
