use contracts::enums::UserRole;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::prefs::load_list_prefs;

pub const LIST_ID: &str = "sys_users";

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<User>,
    pub search_query: String,
    pub role_filter: Option<UserRole>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            role_filter: None,
            sort_field: "username".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl UsersListState {
    pub fn matches(&self, user: &User) -> bool {
        self.role_filter.map_or(true, |r| user.role == r)
            && (self.search_query.trim().is_empty() || user.matches_query(self.search_query.trim()))
    }

    pub fn active_filters_count(&self) -> usize {
        usize::from(!self.search_query.trim().is_empty()) + usize::from(self.role_filter.is_some())
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    let prefs = load_list_prefs(LIST_ID);
    RwSignal::new(UsersListState {
        page_size: prefs.page_size,
        sort_field: prefs.sort_field.unwrap_or_else(|| "username".to_string()),
        sort_ascending: prefs.sort_ascending,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_filters() {
        let user = User {
            username: "thanh.nguyen".into(),
            full_name: Some("Nguyễn Thành".into()),
            role: UserRole::Manager,
            ..Default::default()
        };
        let mut state = UsersListState::default();
        assert!(state.matches(&user));

        state.search_query = "THANH".into();
        assert!(state.matches(&user));
        state.role_filter = Some(UserRole::Admin);
        assert!(!state.matches(&user));
        assert_eq!(state.active_filters_count(), 2);
    }
}
