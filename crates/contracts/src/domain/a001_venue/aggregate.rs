use serde::{Deserialize, Serialize};

use crate::shared::text::contains_ci;

/// Спортивный объект (площадка), на котором расположены корты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Venue {
    /// Обложка: явная, иначе первое фото галереи
    pub fn cover(&self) -> Option<&str> {
        self.cover_image
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.images.first().map(String::as_str))
    }

    pub fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.address, query)
            || contains_ci(&self.city, query)
    }

    /// Другие активные площадки того же города, не более `limit`
    pub fn related<'a>(&self, all: &'a [Venue], limit: usize) -> Vec<&'a Venue> {
        all.iter()
            .filter(|v| v.id != self.id && v.is_active)
            .filter(|v| v.city.trim().eq_ignore_ascii_case(self.city.trim()))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: &str, city: &str, active: bool) -> Venue {
        Venue {
            id: id.to_string(),
            name: format!("Venue {}", id),
            city: city.to_string(),
            is_active: active,
            ..Default::default()
        }
    }

    #[test]
    fn test_related_same_city_only() {
        let current = venue("1", "Hanoi", true);
        let all = vec![
            current.clone(),
            venue("2", "hanoi", true),
            venue("3", "Saigon", true),
            venue("4", "Hanoi", false),
            venue("5", "Hanoi ", true),
        ];
        let ids: Vec<&str> = current.related(&all, 5).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);
        assert_eq!(current.related(&all, 1).len(), 1);
    }

    #[test]
    fn test_cover_falls_back_to_gallery() {
        let mut v = venue("1", "Hanoi", true);
        assert_eq!(v.cover(), None);
        v.images = vec!["a.jpg".into(), "b.jpg".into()];
        assert_eq!(v.cover(), Some("a.jpg"));
        v.cover_image = Some("cover.jpg".into());
        assert_eq!(v.cover(), Some("cover.jpg"));
    }
}
