use crate::enums::NewsStatus;
use crate::shared::text::{contains_ci, contains_ci_opt};

use super::aggregate::News;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilter {
    pub query: String,
    pub category_id: Option<String>,
    pub status: Option<NewsStatus>,
    pub featured_only: bool,
}

impl NewsFilter {
    pub fn active_count(&self) -> usize {
        [
            !self.query.trim().is_empty(),
            self.category_id.is_some(),
            self.status.is_some(),
            self.featured_only,
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}

impl News {
    pub fn matches(&self, filter: &NewsFilter) -> bool {
        if let Some(category_id) = &filter.category_id {
            if self.category_id.as_ref() != Some(category_id) {
                return false;
            }
        }
        if let Some(status) = filter.status {
            if self.status != status {
                return false;
            }
        }
        if filter.featured_only && !self.is_featured {
            return false;
        }
        let q = filter.query.as_str();
        contains_ci(&self.title, q)
            || contains_ci(&self.slug, q)
            || contains_ci_opt(self.summary.as_deref(), q)
            || contains_ci_opt(self.author.as_deref(), q)
            || self.tags.iter().any(|t| contains_ci(t, q))
    }
}

/// Последние опубликованные новости площадки (для виджета «Новости»)
pub fn latest_for_venue<'a>(news: &'a [News], venue_id: &str, limit: usize) -> Vec<&'a News> {
    let mut items: Vec<&News> = news
        .iter()
        .filter(|n| n.is_published())
        .filter(|n| n.venue_id.as_deref() == Some(venue_id))
        .collect();
    items.sort_by(|a, b| b.display_date().cmp(a.display_date()));
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news(id: &str, title: &str, status: NewsStatus, date: &str) -> News {
        News {
            id: id.into(),
            title: title.into(),
            slug: id.into(),
            status,
            published_at: Some(date.into()),
            venue_id: Some("v1".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_by_status_category_and_tags() {
        let mut a = news("a", "Открытие", NewsStatus::Published, "2025-01-01");
        a.category_id = Some("c1".into());
        a.tags = vec!["tennis".into()];
        let b = news("b", "Ремонт", NewsStatus::Draft, "2025-01-02");

        let f = NewsFilter {
            query: "TENN".into(),
            ..Default::default()
        };
        assert!(a.matches(&f));
        assert!(!b.matches(&f));

        let f = NewsFilter {
            category_id: Some("c1".into()),
            status: Some(NewsStatus::Published),
            ..Default::default()
        };
        assert!(a.matches(&f));
        assert!(!b.matches(&f));
        assert_eq!(f.active_count(), 2);

        let f = NewsFilter {
            featured_only: true,
            ..Default::default()
        };
        assert!(!a.matches(&f));
    }

    #[test]
    fn test_latest_for_venue_sorted_and_limited() {
        let mut items = vec![
            news("old", "Old", NewsStatus::Published, "2025-01-01"),
            news("new", "New", NewsStatus::Published, "2025-03-01"),
            news("mid", "Mid", NewsStatus::Published, "2025-02-01"),
            news("draft", "Draft", NewsStatus::Draft, "2025-04-01"),
        ];
        items[2].venue_id = Some("v2".into());
        let ids: Vec<_> = latest_for_venue(&items, "v1", 5).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
        assert_eq!(latest_for_venue(&items, "v1", 1).len(), 1);
    }
}
