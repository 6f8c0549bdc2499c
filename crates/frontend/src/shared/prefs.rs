//! Пользовательские настройки списков (размер страницы, сортировка) в localStorage.
//!
//! Ключ: `list_prefs:{list_id}`, значение: JSON `ListPrefs`.

use serde::{Deserialize, Serialize};
use web_sys::window;

use super::config::config;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPrefs {
    pub page_size: usize,
    #[serde(default)]
    pub sort_field: Option<String>,
    #[serde(default = "default_true")]
    pub sort_ascending: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ListPrefs {
    fn default() -> Self {
        Self {
            page_size: config().default_page_size,
            sort_field: None,
            sort_ascending: true,
        }
    }
}

impl ListPrefs {
    /// Разбор сохранённого JSON; размер страницы вне допустимых значений сбрасывается
    pub fn from_json(raw: &str) -> Self {
        let mut prefs: ListPrefs = serde_json::from_str(raw).unwrap_or_default();
        if !config().page_size_options.contains(&prefs.page_size) {
            prefs.page_size = config().default_page_size;
        }
        prefs
    }
}

fn storage_key(list_id: &str) -> String {
    format!("list_prefs:{}", list_id)
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_list_prefs(list_id: &str) -> ListPrefs {
    local_storage()
        .and_then(|s| s.get_item(&storage_key(list_id)).ok().flatten())
        .map(|raw| ListPrefs::from_json(&raw))
        .unwrap_or_default()
}

pub fn save_list_prefs(list_id: &str, prefs: &ListPrefs) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(prefs) {
        Ok(raw) => {
            if storage.set_item(&storage_key(list_id), &raw).is_err() {
                log::warn!("failed to persist list prefs for {}", list_id);
            }
        }
        Err(e) => log::warn!("failed to serialize list prefs: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_valid() {
        let prefs = ListPrefs::from_json(r#"{"page_size":50,"sort_field":"name","sort_ascending":false}"#);
        assert_eq!(prefs.page_size, 50);
        assert_eq!(prefs.sort_field.as_deref(), Some("name"));
        assert!(!prefs.sort_ascending);
    }

    #[test]
    fn test_from_json_resets_unknown_page_size() {
        let prefs = ListPrefs::from_json(r#"{"page_size":7}"#);
        assert_eq!(prefs.page_size, config().default_page_size);
        assert!(prefs.sort_ascending);
    }

    #[test]
    fn test_from_json_garbage() {
        assert_eq!(ListPrefs::from_json("not json"), ListPrefs::default());
    }
}
