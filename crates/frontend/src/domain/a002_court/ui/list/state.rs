use contracts::domain::a002_court::{Court, CourtFilter};
use leptos::prelude::*;

use crate::shared::prefs::load_list_prefs;

pub const LIST_ID: &str = "a002_court";

#[derive(Clone, Debug)]
pub struct CourtListState {
    pub items: Vec<Court>,
    pub filter: CourtFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for CourtListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: CourtFilter::default(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<CourtListState> {
    let prefs = load_list_prefs(LIST_ID);
    RwSignal::new(CourtListState {
        page_size: prefs.page_size,
        sort_field: prefs.sort_field.unwrap_or_else(|| "name".to_string()),
        sort_ascending: prefs.sort_ascending,
        ..Default::default()
    })
}
