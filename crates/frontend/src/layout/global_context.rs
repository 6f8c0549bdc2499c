use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

/// Состояние админки: открытые вкладки, активная вкладка, видимость меню
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Восстанавливает активную вкладку из `?active=...` и дальше держит URL в синхроне
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_key_from_query(&search) {
            let title = tab_label_for_key(&active_key).to_string();
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = query_for_active_key(&active_key);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let mut next_active = None;
        self.opened.update(|tabs| {
            next_active = next_active_after_close(tabs, key);
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

fn active_key_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn query_for_active_key(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

/// Соседняя вкладка справа, иначе слева
fn next_active_after_close(tabs: &[Tab], closing: &str) -> Option<String> {
    let pos = tabs.iter().position(|t| t.key == closing)?;
    tabs.get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|p| tabs.get(p)))
        .map(|t| t.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str) -> Tab {
        Tab {
            key: key.to_string(),
            title: key.to_string(),
        }
    }

    #[test]
    fn test_active_key_query_roundtrip() {
        assert_eq!(
            active_key_from_query("?active=a002_court"),
            Some("a002_court".to_string())
        );
        assert_eq!(active_key_from_query(""), None);
        assert_eq!(query_for_active_key("sys_users"), "?active=sys_users");
    }

    #[test]
    fn test_next_active_after_close() {
        let tabs = vec![tab("a"), tab("b"), tab("c")];
        assert_eq!(next_active_after_close(&tabs, "b"), Some("c".to_string()));
        assert_eq!(next_active_after_close(&tabs, "c"), Some("b".to_string()));
        assert_eq!(next_active_after_close(&[tab("a")], "a"), None);
        assert_eq!(next_active_after_close(&tabs, "zzz"), None);
    }
}
