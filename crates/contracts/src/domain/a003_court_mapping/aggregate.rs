use serde::{Deserialize, Serialize};

/// Дочерний корт, занимающий позицию `position` внутри родительского
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CourtMapping {
    pub id: String,
    pub parent_court_id: String,
    pub child_court_id: String,
    pub position: u32,
    #[serde(default)]
    pub parent_court_name: Option<String>,
    #[serde(default)]
    pub child_court_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// DTO для создания/обновления маппинга
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CourtMappingDto {
    pub id: Option<String>,
    pub parent_court_id: String,
    pub child_court_id: String,
    pub position: u32,
}

impl From<CourtMapping> for CourtMappingDto {
    fn from(m: CourtMapping) -> Self {
        Self {
            id: Some(m.id),
            parent_court_id: m.parent_court_id,
            child_court_id: m.child_court_id,
            position: m.position,
        }
    }
}

impl CourtMappingDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}
