use contracts::domain::a005_news::{News, NewsFilter};
use leptos::prelude::*;

use crate::shared::prefs::load_list_prefs;

pub const LIST_ID: &str = "a005_news";

#[derive(Clone, Debug)]
pub struct NewsListState {
    pub items: Vec<News>,
    pub filter: NewsFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for NewsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: NewsFilter::default(),
            sort_field: "date".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<NewsListState> {
    let prefs = load_list_prefs(LIST_ID);
    let defaults = NewsListState::default();
    // без сохранённой сортировки: свежие сверху
    let (sort_field, sort_ascending) = match prefs.sort_field {
        Some(field) => (field, prefs.sort_ascending),
        None => (defaults.sort_field.clone(), defaults.sort_ascending),
    };
    RwSignal::new(NewsListState {
        page_size: prefs.page_size,
        sort_field,
        sort_ascending,
        ..defaults
    })
}
