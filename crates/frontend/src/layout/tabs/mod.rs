//! Вкладки админки
//!
//! - `page`: обёртка контента вкладки
//! - `registry`: маппинг tab.key → View
//! - `tab_labels`: заголовки вкладок

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};

const DETAIL_MARKER: &str = "_detail_";
const NEW_ID: &str = "new";

/// Ключ вкладки формы: `a002_court_detail_{id}` или `a002_court_detail_new`
pub fn detail_key(entity: &str, id: Option<&str>) -> String {
    format!("{}{}{}", entity, DETAIL_MARKER, id.unwrap_or(NEW_ID))
}

/// Обратный разбор `detail_key`: сущность и id (`None` для новой записи)
pub fn parse_detail_key(key: &str) -> Option<(&str, Option<String>)> {
    let (entity, id) = key.split_once(DETAIL_MARKER)?;
    if entity.is_empty() || id.is_empty() {
        return None;
    }
    let id = (id != NEW_ID).then(|| id.to_string());
    Some((entity, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_roundtrip() {
        let key = detail_key("a002_court", Some("c-42"));
        assert_eq!(key, "a002_court_detail_c-42");
        assert_eq!(
            parse_detail_key(&key),
            Some(("a002_court", Some("c-42".to_string())))
        );

        let key = detail_key("a005_news", None);
        assert_eq!(key, "a005_news_detail_new");
        assert_eq!(parse_detail_key(&key), Some(("a005_news", None)));
    }

    #[test]
    fn test_parse_detail_key_rejects_plain_keys() {
        assert_eq!(parse_detail_key("a002_court"), None);
        assert_eq!(parse_detail_key("a002_court_detail_"), None);
    }
}
