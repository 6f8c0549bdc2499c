use crate::enums::{CourtStatus, SportType};
use crate::shared::text::{contains_ci, contains_ci_opt};

use super::aggregate::Court;

/// Фильтр списка кортов: строка поиска и выпадающие списки
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtFilter {
    pub query: String,
    pub venue_id: Option<String>,
    pub sport: Option<SportType>,
    pub status: Option<CourtStatus>,
}

impl CourtFilter {
    /// Количество активных фильтров (для бейджа на панели)
    pub fn active_count(&self) -> usize {
        [
            !self.query.trim().is_empty(),
            self.venue_id.is_some(),
            self.sport.is_some(),
            self.status.is_some(),
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}

impl Court {
    pub fn matches(&self, filter: &CourtFilter) -> bool {
        if let Some(venue_id) = &filter.venue_id {
            if &self.venue_id != venue_id {
                return false;
            }
        }
        if let Some(sport) = filter.sport {
            if self.sport != sport {
                return false;
            }
        }
        if let Some(status) = filter.status {
            if self.status != status {
                return false;
            }
        }
        let q = filter.query.as_str();
        contains_ci(&self.name, q)
            || contains_ci_opt(self.venue_name.as_deref(), q)
            || contains_ci_opt(self.surface.as_deref(), q)
            || contains_ci(self.sport.display_name(), q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(id: &str, name: &str, venue: &str, sport: SportType, status: CourtStatus) -> Court {
        Court {
            id: id.into(),
            name: name.into(),
            venue_id: venue.into(),
            venue_name: Some(format!("Venue {}", venue)),
            sport,
            status,
            level: 1,
            capacity: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let c = court("1", "Court A", "v1", SportType::Tennis, CourtStatus::Active);
        assert!(c.matches(&CourtFilter::default()));
        assert_eq!(CourtFilter::default().active_count(), 0);
    }

    #[test]
    fn test_dropdowns_and_query_combine() {
        let courts = vec![
            court("1", "Court A", "v1", SportType::Tennis, CourtStatus::Active),
            court("2", "Court B", "v1", SportType::Badminton, CourtStatus::Active),
            court("3", "Center", "v2", SportType::Tennis, CourtStatus::Maintenance),
        ];
        let filter = CourtFilter {
            query: "court".into(),
            venue_id: Some("v1".into()),
            sport: Some(SportType::Tennis),
            status: None,
        };
        let ids: Vec<_> = courts.iter().filter(|c| c.matches(&filter)).map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
        assert_eq!(filter.active_count(), 3);

        let by_status = CourtFilter {
            status: Some(CourtStatus::Maintenance),
            ..Default::default()
        };
        assert_eq!(courts.iter().filter(|c| c.matches(&by_status)).count(), 1);
    }

    #[test]
    fn test_query_searches_venue_name_and_sport_label() {
        let c = court("1", "A1", "v9", SportType::Badminton, CourtStatus::Active);
        assert!(c.matches(&CourtFilter { query: "venue v9".into(), ..Default::default() }));
        assert!(c.matches(&CourtFilter { query: "бадминтон".into(), ..Default::default() }));
        assert!(!c.matches(&CourtFilter { query: "tennis".into(), ..Default::default() }));
    }
}
