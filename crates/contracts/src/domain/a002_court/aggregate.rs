use serde::{Deserialize, Serialize};

use crate::enums::{CourtStatus, SportType};

/// Корт. Крупный корт может делиться на дочерние (`sub_court_count` позиций),
/// уровень `level` задаёт иерархию: дочерний всегда ниже родителя.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Court {
    pub id: String,
    pub venue_id: String,
    #[serde(default)]
    pub venue_name: Option<String>,
    pub name: String,
    pub sport: SportType,
    #[serde(default)]
    pub surface: Option<String>,
    pub level: u32,
    pub capacity: u32,
    #[serde(default)]
    pub sub_court_count: u32,
    pub price_per_hour: f64,
    pub status: CourtStatus,
    #[serde(default)]
    pub is_indoor: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Court {
    /// Может ли корт выступать родителем в маппинге
    pub fn is_divisible(&self) -> bool {
        self.sub_court_count > 0
    }

    pub fn display_venue(&self) -> &str {
        self.venue_name.as_deref().unwrap_or("-")
    }
}

/// DTO для создания/обновления корта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtDto {
    pub id: Option<String>,
    pub venue_id: String,
    pub name: String,
    pub sport: SportType,
    pub surface: Option<String>,
    pub level: u32,
    pub capacity: u32,
    pub sub_court_count: u32,
    pub price_per_hour: f64,
    pub status: CourtStatus,
    pub is_indoor: bool,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl Default for CourtDto {
    fn default() -> Self {
        Self {
            id: None,
            venue_id: String::new(),
            name: String::new(),
            sport: SportType::default(),
            surface: None,
            level: 1,
            capacity: 4,
            sub_court_count: 0,
            price_per_hour: 0.0,
            status: CourtStatus::Active,
            is_indoor: false,
            description: None,
            images: Vec::new(),
        }
    }
}

impl From<Court> for CourtDto {
    fn from(c: Court) -> Self {
        Self {
            id: Some(c.id),
            venue_id: c.venue_id,
            name: c.name,
            sport: c.sport,
            surface: c.surface,
            level: c.level,
            capacity: c.capacity,
            sub_court_count: c.sub_court_count,
            price_per_hour: c.price_per_hour,
            status: c.status,
            is_indoor: c.is_indoor,
            description: c.description,
            images: c.images,
        }
    }
}

impl CourtDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Валидация формы перед отправкой
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название корта обязательно".into());
        }
        if self.venue_id.trim().is_empty() {
            return Err("Выберите площадку".into());
        }
        if self.level == 0 {
            return Err("Уровень корта должен быть не меньше 1".into());
        }
        if self.capacity == 0 {
            return Err("Вместимость должна быть не меньше 1".into());
        }
        if !self.price_per_hour.is_finite() || self.price_per_hour < 0.0 {
            return Err("Цена за час не может быть отрицательной".into());
        }
        if self.sub_court_count > 0 && self.level < 2 {
            return Err("Корт с дочерними позициями должен иметь уровень не ниже 2".into());
        }
        Ok(())
    }
}

/// Тело PATCH-запроса быстрой смены статуса
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtStatusPatch {
    pub status: CourtStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CourtDto {
        CourtDto {
            venue_id: "v1".into(),
            name: "Court A".into(),
            price_per_hour: 150000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut dto = valid_dto();
        dto.name = "   ".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.venue_id.clear();
        assert_eq!(dto.validate().unwrap_err(), "Выберите площадку");
    }

    #[test]
    fn test_numeric_bounds() {
        let mut dto = valid_dto();
        dto.capacity = 0;
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.price_per_hour = -1.0;
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.price_per_hour = f64::NAN;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_divisible_court_needs_level_above_one() {
        let mut dto = valid_dto();
        dto.sub_court_count = 2;
        assert!(dto.validate().is_err());
        dto.level = 2;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_court_deserializes_with_defaults() {
        let json = r#"{
            "id": "c1", "venue_id": "v1", "name": "Main",
            "sport": "badminton", "level": 2, "capacity": 8,
            "price_per_hour": 120000, "status": "maintenance",
            "created_at": "2025-01-01T00:00:00Z", "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let court: Court = serde_json::from_str(json).unwrap();
        assert_eq!(court.sport, SportType::Badminton);
        assert_eq!(court.status, CourtStatus::Maintenance);
        assert_eq!(court.sub_court_count, 0);
        assert!(court.images.is_empty());
        assert_eq!(court.display_venue(), "-");
    }
}
