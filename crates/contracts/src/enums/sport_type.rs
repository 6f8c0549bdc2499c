use serde::{Deserialize, Serialize};

/// Вид спорта, под который оборудован корт
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    #[default]
    Tennis,
    Badminton,
    Football,
    Futsal,
    Basketball,
    Volleyball,
    Pickleball,
    Other,
}

impl SportType {
    /// Код для API и query-параметров
    pub fn code(&self) -> &'static str {
        match self {
            SportType::Tennis => "tennis",
            SportType::Badminton => "badminton",
            SportType::Football => "football",
            SportType::Futsal => "futsal",
            SportType::Basketball => "basketball",
            SportType::Volleyball => "volleyball",
            SportType::Pickleball => "pickleball",
            SportType::Other => "other",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SportType::Tennis => "Теннис",
            SportType::Badminton => "Бадминтон",
            SportType::Football => "Футбол",
            SportType::Futsal => "Мини-футбол",
            SportType::Basketball => "Баскетбол",
            SportType::Volleyball => "Волейбол",
            SportType::Pickleball => "Пиклбол",
            SportType::Other => "Другое",
        }
    }

    pub fn all() -> Vec<SportType> {
        vec![
            SportType::Tennis,
            SportType::Badminton,
            SportType::Football,
            SportType::Futsal,
            SportType::Basketball,
            SportType::Volleyball,
            SportType::Pickleball,
            SportType::Other,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
